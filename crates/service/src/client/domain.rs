use chrono::{DateTime, Utc};
use common::types::DirectoryUser;
use serde::{Deserialize, Serialize};

/// Client transfer form, shared by the HTTP surface and the directory push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub bakery_id: Option<i32>,
}

/// Join record tying a client to one bakery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientBakeryLink {
    pub bakery_id: i32,
}

/// Domain client (business view). `id` is `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub updated_at: DateTime<Utc>,
    pub links: Vec<ClientBakeryLink>,
}

impl Client {
    /// New, not yet persisted client from caller or directory data.
    /// Any id on the input is ignored.
    pub fn new_from(dto: &ClientDto, links: Vec<ClientBakeryLink>) -> Self {
        Self {
            id: None,
            name: dto.name.clone(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            updated_at: Utc::now(),
            links,
        }
    }

    /// Overwrite the contact fields and swap in an already-validated link set.
    pub fn apply_update(&mut self, dto: &ClientDto, links: Vec<ClientBakeryLink>) {
        self.name = dto.name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.updated_at = Utc::now();
        self.links = links;
    }

    pub fn to_dto(&self) -> ClientDto {
        ClientDto {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            bakery_id: self.links.first().map(|l| l.bakery_id),
        }
    }
}

impl From<DirectoryUser> for ClientDto {
    fn from(u: DirectoryUser) -> Self {
        Self { id: u.id, name: u.name, email: u.email, phone: u.phone, bakery_id: u.bakery_id }
    }
}

impl From<&ClientDto> for DirectoryUser {
    fn from(c: &ClientDto) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            bakery_id: c.bakery_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_form_uses_camel_case_and_nullable_bakery() {
        let dto = ClientDto { id: Some(1), name: "A".into(), email: "a@x.io".into(), phone: "1".into(), bakery_id: None };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "A", "email": "a@x.io", "phone": "1", "bakeryId": null}));

        let parsed: ClientDto = serde_json::from_value(serde_json::json!({"name": "B", "email": "b", "phone": "2", "bakeryId": 3})).unwrap();
        assert_eq!(parsed.id, None);
        assert_eq!(parsed.bakery_id, Some(3));
    }

    #[test]
    fn new_client_ignores_supplied_id_and_exposes_first_link() {
        let dto = ClientDto { id: Some(77), name: "A".into(), email: "e".into(), phone: "p".into(), bakery_id: Some(4) };
        let c = Client::new_from(&dto, vec![ClientBakeryLink { bakery_id: 4 }]);
        assert_eq!(c.id, None);
        assert_eq!(c.to_dto().bakery_id, Some(4));
    }
}
