use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated staff user selling on behalf of customers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// An authenticated operator session. Constructed once per login and
/// passed explicitly to whatever needs it; there is no ambient session
/// singleton anywhere in the workspace.
#[derive(Debug, Clone)]
pub struct OperatorSession {
    pub session_id: Uuid,
    pub token: String,
    pub operator: Operator,
}

impl OperatorSession {
    pub fn new(token: String, operator: Operator) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            token,
            operator,
        }
    }
}
