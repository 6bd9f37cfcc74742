use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}
