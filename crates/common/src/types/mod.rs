use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Client-shaped record as served by the external user directory.
///
/// The directory (jsonplaceholder-style) carries many more fields
/// (`username`, `address`, `company`, ...); they are ignored on decode.
/// Missing and `null` text fields both decode as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default)]
    pub bakery_id: Option<i32>,
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_fields_decode_as_empty() {
        let u: DirectoryUser =
            serde_json::from_str(r#"{"id": 2, "name": "Ervin", "email": null, "phone": null, "bakeryId": null}"#).unwrap();
        assert_eq!(u.id, Some(2));
        assert_eq!(u.name, "Ervin");
        assert_eq!(u.email, "");
        assert_eq!(u.phone, "");
        assert_eq!(u.bakery_id, None);
    }
}
