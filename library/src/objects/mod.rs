pub mod block;
pub mod color;
pub mod material;
pub mod material_index;
pub mod mesh_info;
pub mod sphere;
pub mod triangle;
