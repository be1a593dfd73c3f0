use indexmap::IndexMap;

use crate::ast::Numeric;
use crate::{TagresError, Value};

fn type_error(message: String, hint: &str, code: u32) -> TagresError {
    TagresError::TypeError {
        message,
        line: 0,
        column: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error(
                format!("Expected string, got {:?}", value),
                "Use a quoted string value",
                401,
            )),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(type_error(
                format!("Expected boolean, got {:?}", value),
                "Use true or false",
                404,
            )),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Numeric(Numeric::Integer(i)) => Ok(i),
            Value::Numeric(Numeric::Float(f)) => Err(type_error(
                format!("Expected integer, got float {}", f),
                "Write the value without a fractional part",
                402,
            )),
            _ => Err(type_error(
                format!("Expected integer, got {:?}", value),
                "Use a whole number value",
                402,
            )),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let i = i64::try_from(value)?;
        i32::try_from(i).map_err(|_| {
            type_error(
                format!("Number {} out of range for i32", i),
                "Use a number within i32 range",
                403,
            )
        })
    }
}

impl TryFrom<Value> for u16 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let i = i64::try_from(value)?;
        u16::try_from(i).map_err(|_| {
            type_error(
                format!("Number {} out of range for u16", i),
                "Use a number between 0 and 65535",
                403,
            )
        })
    }
}

impl TryFrom<Value> for u32 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let i = i64::try_from(value)?;
        u32::try_from(i).map_err(|_| {
            type_error(
                format!("Number {} out of range for u32", i),
                "Use a number between 0 and 4294967295",
                403,
            )
        })
    }
}

impl TryFrom<Value> for u64 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let i = i64::try_from(value)?;
        u64::try_from(i).map_err(|_| {
            type_error(
                format!("Number {} out of range for u64", i),
                "Use a positive whole number",
                403,
            )
        })
    }
}

impl TryFrom<Value> for usize {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let i = i64::try_from(value)?;
        usize::try_from(i).map_err(|_| {
            type_error(
                format!("Number {} out of range for usize", i),
                "Use a positive whole number",
                403,
            )
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Numeric(Numeric::Float(f)) => Ok(f),
            Value::Numeric(Numeric::Integer(i)) => Ok(i as f64),
            _ => Err(type_error(
                format!("Expected number, got {:?}", value),
                "Use a number value",
                402,
            )),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|f| f as f32)
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = TagresError>,
{
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let mut result = Vec::new();
                for item in items {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(type_error(
                format!("Expected array, got {:?}", value),
                "Use an array [...] value",
                405,
            )),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Dictionary(map) => Ok(map),
            _ => Err(type_error(
                format!("Expected dictionary, got {:?}", value),
                "Use a dictionary {...} value",
                410,
            )),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, String> {
    type Error = TagresError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let base = IndexMap::<String, Value>::try_from(value)?;
        let mut map = IndexMap::new();
        for (key, val) in base {
            map.insert(key, String::try_from(val)?);
        }
        Ok(map)
    }
}
