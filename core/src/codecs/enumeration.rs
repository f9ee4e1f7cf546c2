//! codecs/enumeration.rs
//! Enumeration members travel as their symbolic name.

use crate::codecs::{wire_kind_name, Cerealizer};
use crate::descriptor::TypeDescriptor;
use crate::registry::Registry;
use crate::types::CerealError;
use crate::value::{Value, WireValue};

pub struct EnumCerealizer;

impl Cerealizer for EnumCerealizer {
    fn encode(
        &self,
        _registry: &Registry,
        value: &Value,
        ty: &TypeDescriptor,
    ) -> Result<WireValue, CerealError> {
        let (name, symbols) = match ty {
            TypeDescriptor::Enum { name, symbols } => (name, symbols),
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "enum descriptor",
                    found: format!("{other:?}"),
                })
            }
        };
        let symbol = match value {
            Value::Enum { symbol, .. } => symbol,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "enum",
                    found: other.kind_name().to_string(),
                })
            }
        };
        if !symbols.contains(symbol) {
            return Err(CerealError::UnknownEnumSymbol {
                name: name.clone(),
                symbol: symbol.clone(),
            });
        }
        Ok(WireValue::String(symbol.clone()))
    }

    fn decode(
        &self,
        _registry: &Registry,
        wire: &WireValue,
        ty: &TypeDescriptor,
    ) -> Result<Value, CerealError> {
        let (name, symbols) = match ty {
            TypeDescriptor::Enum { name, symbols } => (name, symbols),
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "enum descriptor",
                    found: format!("{other:?}"),
                })
            }
        };
        let symbol = match wire {
            WireValue::String(s) => s,
            other => {
                return Err(CerealError::TypeMismatch {
                    expected: "string",
                    found: wire_kind_name(other),
                })
            }
        };
        if !symbols.contains(symbol) {
            return Err(CerealError::UnknownEnumSymbol {
                name: name.clone(),
                symbol: symbol.clone(),
            });
        }
        Ok(Value::Enum {
            name: name.clone(),
            symbol: symbol.clone(),
        })
    }
}
