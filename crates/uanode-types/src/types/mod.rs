mod browse_path;
mod expanded_node_id;
mod namespace;
mod node_id;
mod qualified_name;
mod reference_type;

pub use browse_path::*;
pub use expanded_node_id::*;
pub use namespace::*;
pub use node_id::*;
pub use qualified_name::*;
pub use reference_type::*;
