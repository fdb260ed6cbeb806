/// Creation form → record assembly
use serde::{Deserialize, Serialize};

use crate::types::{Address, Company, Geo, NewUser};

/// Flat fields posted by the creation form
///
/// Field names follow the form's input names. Every input is marked
/// `required` in the page; nothing is revalidated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub lat: String,
    pub lng: String,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    pub bs: String,
}

impl CreateUserForm {
    /// Input names in the order they appear on the form
    pub const FIELD_NAMES: [&'static str; 14] = [
        "name",
        "username",
        "email",
        "phone",
        "website",
        "street",
        "suite",
        "city",
        "zipcode",
        "lat",
        "lng",
        "companyName",
        "catchPhrase",
        "bs",
    ];
}

impl From<CreateUserForm> for NewUser {
    fn from(form: CreateUserForm) -> Self {
        NewUser {
            name: form.name,
            username: form.username,
            email: form.email,
            phone: form.phone,
            website: form.website,
            address: Address {
                street: form.street,
                suite: form.suite,
                city: form.city,
                zipcode: form.zipcode,
                geo: Geo {
                    lat: form.lat,
                    lng: form.lng,
                },
            },
            company: Company {
                name: form.company_name,
                catch_phrase: form.catch_phrase,
                bs: form.bs,
            },
        }
    }
}
