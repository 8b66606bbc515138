use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ASHA Worker")]
    AshaWorker,
    #[serde(rename = "PHC Supervisor")]
    PhcSupervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::AshaWorker => "ASHA Worker",
            Role::PhcSupervisor => "PHC Supervisor",
        }
    }

    pub fn is_supervisor(&self) -> bool {
        *self == Role::PhcSupervisor
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Demo account. Passwords are plaintext and compared verbatim.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

impl User {
    pub fn new(id: &str, password: &str, role: Role, name: &str) -> Self {
        Self {
            id: id.to_string(),
            password: password.to_string(),
            role,
            name: name.to_string(),
        }
    }
}
