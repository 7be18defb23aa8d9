use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Worker {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub aadhar: Option<String>,
    #[serde(default)]
    pub bankname: Option<String>,
    #[serde(default)]
    pub ifscode: Option<String>,
    #[serde(default)]
    pub accountno: Option<String>,
    #[serde(default)]
    pub pfno: Option<String>,
    #[serde(default)]
    pub esicno: Option<String>,
}

/// Body of `POST /workers/`. Only the name is required.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct WorkerCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bankname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifscode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esicno: Option<String>,
}

/// Body of `PUT /workers/{id}`; unset fields are left untouched.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct WorkerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bankname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifscode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esicno: Option<String>,
}

impl WorkerUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
