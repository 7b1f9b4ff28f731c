pub(crate) mod godot;
pub(crate) mod project;
pub(crate) mod resource;
pub(crate) mod scene;
pub(crate) mod script;
