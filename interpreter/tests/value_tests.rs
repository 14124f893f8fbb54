#[cfg(test)]
mod tests {
  use interpreter::value::Value;

  #[test]
  fn test_string_hash_keys() {
    let hello1 = Value::Str("Hello World".to_string());
    let hello2 = Value::Str("Hello World".to_string());
    let diff1 = Value::Str("My name is johnny".to_string());
    let diff2 = Value::Str("My name is johnny".to_string());

    assert_eq!(hello1.hash_key(), hello2.hash_key());
    assert_eq!(diff1.hash_key(), diff2.hash_key());
    assert_ne!(hello1.hash_key(), diff1.hash_key());
  }

  #[test]
  fn test_integer_and_boolean_hash_keys() {
    assert_eq!(
      Value::Integer(1).hash_key(),
      Value::Integer(1).hash_key()
    );
    assert_ne!(
      Value::Integer(1).hash_key(),
      Value::Integer(2).hash_key()
    );

    assert_eq!(
      Value::Boolean(true).hash_key(),
      Value::Boolean(true).hash_key()
    );
    assert_ne!(
      Value::Boolean(true).hash_key(),
      Value::Boolean(false).hash_key()
    );
  }

  /// The type tag is part of the key, so `1` and `true` never collide
  /// even though both hash to 1.
  #[test]
  fn test_hash_keys_are_type_tagged() {
    assert_ne!(
      Value::Integer(1).hash_key(),
      Value::Boolean(true).hash_key()
    );
  }

  #[test]
  fn test_only_scalars_are_hashable() {
    assert!(Value::Integer(1).hash_key().is_some());
    assert!(Value::Boolean(false).hash_key().is_some());
    assert!(Value::Str("x".to_string()).hash_key().is_some());

    assert!(Value::Null.hash_key().is_none());
    assert!(Value::Array(vec![]).hash_key().is_none());
  }

  #[test]
  fn test_type_names() {
    let tests = [
      (Value::Integer(1), "INTEGER"),
      (Value::Boolean(true), "BOOLEAN"),
      (Value::Str(String::new()), "STRING"),
      (Value::Null, "NULL"),
      (Value::Error("boom".to_string()), "ERROR"),
      (Value::Array(vec![]), "ARRAY"),
    ];

    for (value, expected) in tests {
      assert_eq!(value.type_name(), expected);
    }
  }

  #[test]
  fn test_inspect_forms() {
    assert_eq!(Value::Integer(5).inspect(), "5");
    assert_eq!(Value::Boolean(true).inspect(), "true");
    assert_eq!(Value::Str("hi".to_string()).inspect(), "hi");
    assert_eq!(Value::Null.inspect(), "null");
    assert_eq!(
      Value::Error("type mismatch: INTEGER + BOOLEAN".to_string()).inspect(),
      "ERROR: type mismatch: INTEGER + BOOLEAN"
    );
    assert_eq!(
      Value::Array(vec![Value::Integer(1), Value::Str("two".to_string())]).inspect(),
      "[1, two]"
    );
    assert_eq!(
      Value::Return(Box::new(Value::Integer(7))).inspect(),
      "7"
    );
  }
}
