//! Decorative renderers.
//!
//! Each routine is a stateless function over a [`Surface`](crate::surface::Surface):
//! it sets the style it needs, records its shapes, and returns nothing. Calling
//! one twice with the same arguments records the same shapes.

pub mod border;
pub mod cathedral;
pub mod decoration;
pub mod glass_tower;
pub mod industrial;
pub mod pub_house;
pub mod row_house;
pub mod street;
pub mod texture;
pub mod tree;
pub mod urban;

pub use border::draw_border_building;
pub use cathedral::draw_cathedral;
pub use decoration::{PatchMark, PatchPoint, draw_decoration_patch, draw_small_elements, patch_points};
pub use glass_tower::{GlassTint, draw_glass_tower};
pub use industrial::draw_industrial_towers;
pub use pub_house::{draw_pub, pub_sign_width};
pub use row_house::{ClusterHouse, ClusterPlan, draw_row_cluster, draw_row_house, row_cluster_plan};
pub use street::{FlagStyle, Orientation, RoadSignKind, Signal, draw_crosswalk, draw_flag, draw_road_sign, draw_traffic_light};
pub use texture::draw_texture;
pub use tree::draw_tree;
pub use urban::{
    ElementKind, InfrastructureKind, SignKind, UrbanBuildingKind, draw_element, draw_infrastructure, draw_sign,
    draw_urban_building,
};
