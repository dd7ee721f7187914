use serde_json::Value;

use crate::{
    domain::{Record, RecordId},
    error::DecodeError,
};

const REQUIRED_FIELDS: [&str; 4] = ["id", "name", "email", "role"];

/// Decodes the member list served by the data source.
///
/// The payload is a JSON array of objects carrying `id`, `name`, `email` and
/// `role` strings. Extra keys are ignored. An entry missing any of the four
/// fields rejects the whole payload.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let payload: Value = serde_json::from_slice(bytes)?;
    let Value::Array(entries) = payload else {
        return Err(DecodeError::NotAnArray);
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(index, entry))
        .collect()
}

fn decode_entry(index: usize, entry: &Value) -> Result<Record, DecodeError> {
    let [id, name, email, role] = REQUIRED_FIELDS.map(|field| {
        entry
            .get(field)
            .and_then(Value::as_str)
            .ok_or(DecodeError::MissingField { index, field })
    });

    Ok(Record {
        id: RecordId::new(id?),
        name: name?.to_string(),
        email: email?.to_string(),
        role: role?.to_string(),
    })
}
