use bytes::Bytes;
use serde::Serialize;

use crate::{error::Error, types};

#[derive(Serialize)]
#[serde(rename = "objects")]
struct XmlObjects<'a> {
    #[serde(rename = "object")]
    objects: Vec<XmlObject<'a>>,
}

#[derive(Serialize)]
struct XmlObject<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@size", skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
}

pub(crate) fn parse_error_xml(body: &str) -> Option<types::XmlError> {
    if body.trim().is_empty() {
        return None;
    }

    quick_xml::de::from_str::<types::XmlError>(body).ok()
}

/// Bulk put body: one `<object name=".." size=".."/>` per entry, in order.
pub(crate) fn encode_bulk_put(objects: &[types::ObjectDescriptor]) -> Result<Bytes, Error> {
    encode_objects(
        objects
            .iter()
            .map(|o| XmlObject {
                name: &o.name,
                size: Some(o.size),
            })
            .collect(),
    )
}

/// Bulk get body: one `<object name=".."/>` per entry, in order.
pub(crate) fn encode_bulk_get(names: &[String]) -> Result<Bytes, Error> {
    encode_objects(
        names
            .iter()
            .map(|name| XmlObject { name, size: None })
            .collect(),
    )
}

fn encode_objects(objects: Vec<XmlObject<'_>>) -> Result<Bytes, Error> {
    let xml = quick_xml::se::to_string(&XmlObjects { objects })
        .map_err(|e| Error::decode("failed to encode object list XML", Some(Box::new(e))))?;
    Ok(Bytes::from(xml))
}
