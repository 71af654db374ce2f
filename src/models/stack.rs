use serde::{Deserialize, Serialize};

/// A deployed compose/swarm stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stack {
    pub id: u32,
    pub name: String,
    #[serde(rename = "SwarmID", default, skip_serializing_if = "Option::is_none")]
    pub swarm_id: Option<String>,
    #[serde(default)]
    pub entry_point: String,
    #[serde(default)]
    pub env: Vec<StackEnv>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEnv {
    pub name: String,
    pub value: String,
}

/// Creation payload for a new stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSpec {
    pub name: String,
    #[serde(rename = "SwarmID", default, skip_serializing_if = "Option::is_none")]
    pub swarm_id: Option<String>,
    pub stack_file_content: String,
    #[serde(default)]
    pub env: Vec<StackEnv>,
}

/// Response of the stack-file lookup (`GET /stacks/:id/file`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackFile {
    pub stack_file_content: String,
}
