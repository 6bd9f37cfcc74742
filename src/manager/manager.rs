use std::cell::{
    RefCell, RefMut
};
use std::collections::BTreeMap;

use tracing::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>>;
    
    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn names(&self) -> Vec<String> {
        self.map().keys().cloned().collect()
    }

    fn values(&self) -> Vec<V> {
        self.map().values().cloned().collect()
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {                
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


/// Named objects built from JSON by `get_obj_from_json`, kept in name order.
pub struct Manager<V> {
    map_cell: RefCell<BTreeMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where 
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(BTreeMap::new()), get_obj_from_json}
    }
}

impl <V> IManager<V> for Manager<V> where 
    V: Clone {
    fn map(&self) -> RefMut<'_, BTreeMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {   
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?; 
        let name = named_object.name().to_owned();
        if self.map().contains_key(&name) {
            return Err(ManagerError::DuplicateNameError(name));
        }
        let v = (self.get_obj_from_json)(json_value)?;
        debug!(name = %name, "registered object");
        self.map().insert(name, v);
        Ok(())
    }
} 
