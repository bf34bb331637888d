use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(tag = "type")]
pub enum CtxError {
    Other(OtherError),
}

impl From<OtherError> for CtxError {
    fn from(error: OtherError) -> Self {
        CtxError::Other(error)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OtherError {
    EventNotFound,
    MonkNotFound,
}

impl OtherError {
    pub fn message(&self) -> String {
        match &self {
            OtherError::EventNotFound => "Event is not found".to_owned(),
            OtherError::MonkNotFound => "Monk is not found".to_owned(),
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            OtherError::EventNotFound => 1,
            OtherError::MonkNotFound => 2,
        }
    }
}

impl Serialize for OtherError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("OtherError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}
