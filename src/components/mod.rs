pub mod containers_actions;

pub use containers_actions::{ContainerAction, ContainersDatatableActions};
