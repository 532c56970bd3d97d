//! `Serialize` implementations (feature `serde`).
//!
//! Outcomes serialize as `{"IsSuccess": true, "Value": ...}` or
//! `{"IsSuccess": false, "Errors": [...]}`. The valueless `Outcome<()>` omits
//! `Value`; every other success writes it, unit structs included.
//!
//! Each error is `{"Message": ..., "Metadata": {...}}`, with `Metadata` left
//! out when empty and its keys in insertion order. Error objects carry no
//! `$type` discriminator and metadata keys are not sorted, so the output is
//! not byte-compatible with converters that emit either.
//!
//! A metadata value is written as `{"$type": ..., "Value": ...}`, except
//! captured faults, which are written as
//! `{"$type": kind, "Message": ..., "StackTrace": ..., "InnerException": ...}`.
//!
//! Deserialization is not supported: faults and opaque values cannot be
//! reconstructed from their serialized form.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, SerializeStruct, Serializer};

use crate::outcome::Outcome;
use crate::types::{Error, Errors, Fault, Metadata, MetadataValue};

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Success(value) => {
                if is_unit::<T>() {
                    let mut state = serializer.serialize_struct("Outcome", 1)?;
                    state.serialize_field("IsSuccess", &true)?;
                    state.end()
                } else {
                    let mut state = serializer.serialize_struct("Outcome", 2)?;
                    state.serialize_field("IsSuccess", &true)?;
                    state.serialize_field("Value", value)?;
                    state.end()
                }
            },
            Outcome::Failure(errors) => {
                let mut state = serializer.serialize_struct("Outcome", 2)?;
                state.serialize_field("IsSuccess", &false)?;
                state.serialize_field("Errors", errors)?;
                state.end()
            },
        }
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for error in self {
            seq.serialize_element(error)?;
        }
        seq.end()
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.metadata().is_empty() {
            let mut state = serializer.serialize_struct("Error", 1)?;
            state.serialize_field("Message", self.message())?;
            state.end()
        } else {
            let mut state = serializer.serialize_struct("Error", 2)?;
            state.serialize_field("Message", self.message())?;
            state.serialize_field("Metadata", self.metadata())?;
            state.end()
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for MetadataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(value) => typed(serializer, "bool", value),
            Self::Int(value) => typed(serializer, "i64", value),
            Self::UInt(value) => typed(serializer, "u64", value),
            Self::Float(value) => typed(serializer, "f64", value),
            Self::Str(value) => typed(serializer, "String", &**value),
            Self::Fault(fault) => fault.serialize(serializer),
            Self::Opaque(opaque) => typed(serializer, opaque.type_name(), &()),
        }
    }
}

impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.inner().is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("Fault", len)?;
        state.serialize_field("$type", self.kind())?;
        state.serialize_field("Message", self.message())?;
        state.serialize_field("StackTrace", &self.backtrace())?;
        if let Some(inner) = self.inner() {
            state.serialize_field("InnerException", inner)?;
        }
        state.end()
    }
}

/// `true` only for `()`, the payload of the valueless `Outcome`.
fn is_unit<T>() -> bool {
    core::mem::size_of::<T>() == 0 && core::any::type_name::<T>() == "()"
}

fn typed<S, V>(serializer: S, type_name: &str, value: &V) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(2))?;
    map.serialize_entry("$type", type_name)?;
    map.serialize_entry("Value", value)?;
    map.end()
}
