#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTeamMember {
    pub name: String,
    pub avatar: Option<String>,
    pub role: Option<String>,
}
