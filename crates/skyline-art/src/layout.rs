//! Placement tables for the background.
//!
//! Every decoration on the canvas is a literal record here. [`background_plan`]
//! flattens the tables into the order they are painted: ground texture, the
//! border frame, small scattered pieces, and finally the landmarks and the pub
//! on top.

use skyline_engine::coords::{Rect, Vec2};
use skyline_engine::paint::Color;

use crate::CANVAS;
use crate::art::{
    self, ElementKind, FlagStyle, GlassTint, InfrastructureKind, Orientation, RoadSignKind, SignKind, Signal,
    UrbanBuildingKind,
};
use crate::palette::FACADES;
use crate::surface::Surface;

pub const PUB_NAME: &str = "The Crown & Anchor";

// ── placement records ─────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderBuilding {
    pub body: Rect,
    pub facade: u32,
}

impl BorderBuilding {
    /// Building of `width × height` standing on `bottom`.
    pub const fn new(x: f32, bottom: f32, width: f32, height: f32, facade: u32) -> Self {
        Self { body: Rect::new(x, bottom - height, width, height), facade }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RowHouseCluster {
    pub center: Vec2,
    pub count: u32,
    pub variant: u32,
}

impl RowHouseCluster {
    pub const fn new(x: f32, y: f32, count: u32, variant: u32) -> Self {
        Self { center: Vec2::new(x, y), count, variant }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TreePlacement {
    pub base: Vec2,
    pub size: f32,
}

impl TreePlacement {
    pub const fn new(x: f32, y: f32, size: f32) -> Self {
        Self { base: Vec2::new(x, y), size }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlagPlacement {
    pub base: Vec2,
    pub scale: f32,
    pub style: FlagStyle,
}

impl FlagPlacement {
    pub const fn new(x: f32, y: f32, scale: f32, style: FlagStyle) -> Self {
        Self { base: Vec2::new(x, y), scale, style }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrafficLightPlacement {
    pub base: Vec2,
    pub scale: f32,
    pub lit: Signal,
}

impl TrafficLightPlacement {
    pub const fn new(x: f32, y: f32, scale: f32, lit: Signal) -> Self {
        Self { base: Vec2::new(x, y), scale, lit }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoadSignPlacement {
    pub base: Vec2,
    pub scale: f32,
    pub kind: RoadSignKind,
}

impl RoadSignPlacement {
    pub const fn new(x: f32, y: f32, scale: f32, kind: RoadSignKind) -> Self {
        Self { base: Vec2::new(x, y), scale, kind }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CrosswalkPlacement {
    pub origin: Vec2,
    pub length: f32,
    pub stripes: u32,
    pub orientation: Orientation,
}

impl CrosswalkPlacement {
    pub const fn new(x: f32, y: f32, length: f32, stripes: u32, orientation: Orientation) -> Self {
        Self { origin: Vec2::new(x, y), length, stripes, orientation }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UrbanBuildingPlacement {
    pub base: Vec2,
    pub width: f32,
    pub height: f32,
    pub kind: UrbanBuildingKind,
}

impl UrbanBuildingPlacement {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, kind: UrbanBuildingKind) -> Self {
        Self { base: Vec2::new(x, y), width, height, kind }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InfrastructurePlacement {
    pub base: Vec2,
    pub kind: InfrastructureKind,
}

impl InfrastructurePlacement {
    pub const fn new(x: f32, y: f32, kind: InfrastructureKind) -> Self {
        Self { base: Vec2::new(x, y), kind }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SignPlacement {
    pub base: Vec2,
    pub kind: SignKind,
}

impl SignPlacement {
    pub const fn new(x: f32, y: f32, kind: SignKind) -> Self {
        Self { base: Vec2::new(x, y), kind }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementPlacement {
    pub base: Vec2,
    pub kind: ElementKind,
}

impl ElementPlacement {
    pub const fn new(x: f32, y: f32, kind: ElementKind) -> Self {
        Self { base: Vec2::new(x, y), kind }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PatchPlacement {
    pub center: Vec2,
}

impl PatchPlacement {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { center: Vec2::new(x, y) }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SmallElementsPlacement {
    pub center: Vec2,
    pub count: u32,
}

impl SmallElementsPlacement {
    pub const fn new(x: f32, y: f32, count: u32) -> Self {
        Self { center: Vec2::new(x, y), count }
    }
}

/// Position and scale of a one-off landmark.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LandmarkPlacement {
    pub base: Vec2,
    pub scale: f32,
}

impl LandmarkPlacement {
    pub const fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { base: Vec2::new(x, y), scale }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlassTowerPlacement {
    pub base: Vec2,
    pub scale: f32,
    pub tint: GlassTint,
}

impl GlassTowerPlacement {
    pub const fn new(x: f32, y: f32, scale: f32, tint: GlassTint) -> Self {
        Self { base: Vec2::new(x, y), scale, tint }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PubPlacement {
    /// Top-left of the walls.
    pub origin: Vec2,
    pub name: &'static str,
}

// ── tables ────────────────────────────────────────────────────────────────

const TOP_EDGE: f32 = 30.0;
const BOTTOM_EDGE: f32 = 596.0;

pub const BORDER_TOP: [BorderBuilding; 15] = [
    BorderBuilding::new(6.0, TOP_EDGE, 52.0, 22.0, FACADES[0]),
    BorderBuilding::new(65.0, TOP_EDGE, 52.0, 18.0, FACADES[1]),
    BorderBuilding::new(124.0, TOP_EDGE, 52.0, 24.0, FACADES[2]),
    BorderBuilding::new(183.0, TOP_EDGE, 52.0, 20.0, FACADES[3]),
    BorderBuilding::new(242.0, TOP_EDGE, 52.0, 23.0, FACADES[4]),
    BorderBuilding::new(301.0, TOP_EDGE, 52.0, 19.0, FACADES[5]),
    BorderBuilding::new(360.0, TOP_EDGE, 52.0, 21.0, FACADES[0]),
    BorderBuilding::new(419.0, TOP_EDGE, 52.0, 24.0, FACADES[1]),
    BorderBuilding::new(478.0, TOP_EDGE, 52.0, 18.0, FACADES[2]),
    BorderBuilding::new(537.0, TOP_EDGE, 52.0, 22.0, FACADES[3]),
    BorderBuilding::new(596.0, TOP_EDGE, 52.0, 20.0, FACADES[4]),
    BorderBuilding::new(655.0, TOP_EDGE, 52.0, 23.0, FACADES[5]),
    BorderBuilding::new(714.0, TOP_EDGE, 52.0, 19.0, FACADES[0]),
    BorderBuilding::new(773.0, TOP_EDGE, 52.0, 24.0, FACADES[1]),
    BorderBuilding::new(832.0, TOP_EDGE, 52.0, 21.0, FACADES[2]),
];

pub const BORDER_BOTTOM: [BorderBuilding; 15] = [
    BorderBuilding::new(6.0, BOTTOM_EDGE, 52.0, 20.0, FACADES[3]),
    BorderBuilding::new(65.0, BOTTOM_EDGE, 52.0, 23.0, FACADES[4]),
    BorderBuilding::new(124.0, BOTTOM_EDGE, 52.0, 19.0, FACADES[5]),
    BorderBuilding::new(183.0, BOTTOM_EDGE, 52.0, 24.0, FACADES[0]),
    BorderBuilding::new(242.0, BOTTOM_EDGE, 52.0, 18.0, FACADES[1]),
    BorderBuilding::new(301.0, BOTTOM_EDGE, 52.0, 22.0, FACADES[2]),
    BorderBuilding::new(360.0, BOTTOM_EDGE, 52.0, 21.0, FACADES[3]),
    BorderBuilding::new(419.0, BOTTOM_EDGE, 52.0, 19.0, FACADES[4]),
    BorderBuilding::new(478.0, BOTTOM_EDGE, 52.0, 24.0, FACADES[5]),
    BorderBuilding::new(537.0, BOTTOM_EDGE, 52.0, 20.0, FACADES[0]),
    BorderBuilding::new(596.0, BOTTOM_EDGE, 52.0, 23.0, FACADES[1]),
    BorderBuilding::new(655.0, BOTTOM_EDGE, 52.0, 18.0, FACADES[2]),
    BorderBuilding::new(714.0, BOTTOM_EDGE, 52.0, 22.0, FACADES[3]),
    BorderBuilding::new(773.0, BOTTOM_EDGE, 52.0, 20.0, FACADES[4]),
    BorderBuilding::new(832.0, BOTTOM_EDGE, 52.0, 24.0, FACADES[5]),
];

pub const PATCHES: [PatchPlacement; 8] = [
    PatchPlacement::new(60.0, 70.0),
    PatchPlacement::new(300.0, 60.0),
    PatchPlacement::new(870.0, 90.0),
    PatchPlacement::new(170.0, 440.0),
    PatchPlacement::new(450.0, 560.0),
    PatchPlacement::new(800.0, 400.0),
    PatchPlacement::new(30.0, 450.0),
    PatchPlacement::new(640.0, 200.0),
];

pub const CROSSWALKS: [CrosswalkPlacement; 3] = [
    CrosswalkPlacement::new(300.0, 400.0, 20.0, 6, Orientation::Horizontal),
    CrosswalkPlacement::new(575.0, 330.0, 22.0, 5, Orientation::Vertical),
    CrosswalkPlacement::new(150.0, 300.0, 18.0, 5, Orientation::Horizontal),
];

pub const ROW_CLUSTERS: [RowHouseCluster; 5] = [
    RowHouseCluster::new(90.0, 420.0, 3, 0),
    RowHouseCluster::new(270.0, 330.0, 4, 1),
    RowHouseCluster::new(640.0, 420.0, 2, 2),
    RowHouseCluster::new(810.0, 520.0, 3, 3),
    RowHouseCluster::new(220.0, 540.0, 2, 4),
];

pub const URBAN_BUILDINGS: [UrbanBuildingPlacement; 6] = [
    UrbanBuildingPlacement::new(600.0, 300.0, 44.0, 60.0, UrbanBuildingKind::Office),
    UrbanBuildingPlacement::new(660.0, 300.0, 40.0, 46.0, UrbanBuildingKind::Shop),
    UrbanBuildingPlacement::new(330.0, 120.0, 44.0, 70.0, UrbanBuildingKind::Apartment),
    UrbanBuildingPlacement::new(560.0, 150.0, 36.0, 80.0, UrbanBuildingKind::Office),
    UrbanBuildingPlacement::new(700.0, 150.0, 40.0, 55.0, UrbanBuildingKind::Apartment),
    UrbanBuildingPlacement::new(560.0, 560.0, 40.0, 40.0, UrbanBuildingKind::Shop),
];

pub const TREES: [TreePlacement; 12] = [
    TreePlacement::new(40.0, 120.0, 1.0),
    TreePlacement::new(60.0, 250.0, 1.1),
    TreePlacement::new(240.0, 140.0, 0.9),
    TreePlacement::new(300.0, 200.0, 1.2),
    TreePlacement::new(380.0, 300.0, 1.0),
    TreePlacement::new(520.0, 360.0, 0.9),
    TreePlacement::new(700.0, 360.0, 1.1),
    TreePlacement::new(860.0, 380.0, 1.0),
    TreePlacement::new(860.0, 140.0, 0.8),
    TreePlacement::new(40.0, 540.0, 1.0),
    TreePlacement::new(320.0, 560.0, 0.9),
    TreePlacement::new(690.0, 560.0, 1.0),
];

pub const FLAGS: [FlagPlacement; 3] = [
    FlagPlacement::new(205.0, 90.0, 1.0, FlagStyle::Civic),
    FlagPlacement::new(440.0, 420.0, 0.9, FlagStyle::Festival),
    FlagPlacement::new(850.0, 250.0, 0.8, FlagStyle::Harbour),
];

pub const TRAFFIC_LIGHTS: [TrafficLightPlacement; 4] = [
    TrafficLightPlacement::new(350.0, 390.0, 1.0, Signal::Red),
    TrafficLightPlacement::new(560.0, 400.0, 1.0, Signal::Green),
    TrafficLightPlacement::new(160.0, 330.0, 0.9, Signal::Amber),
    TrafficLightPlacement::new(740.0, 470.0, 1.0, Signal::Red),
];

pub const ROAD_SIGNS: [RoadSignPlacement; 4] = [
    RoadSignPlacement::new(250.0, 400.0, 1.0, RoadSignKind::Stop),
    RoadSignPlacement::new(590.0, 230.0, 0.9, RoadSignKind::Yield),
    RoadSignPlacement::new(480.0, 300.0, 1.0, RoadSignKind::OneWay),
    RoadSignPlacement::new(130.0, 470.0, 0.9, RoadSignKind::Stop),
];

pub const INFRASTRUCTURE: [InfrastructurePlacement; 8] = [
    InfrastructurePlacement::new(270.0, 420.0, InfrastructureKind::Streetlight),
    InfrastructurePlacement::new(450.0, 370.0, InfrastructureKind::Streetlight),
    InfrastructurePlacement::new(620.0, 460.0, InfrastructureKind::Streetlight),
    InfrastructurePlacement::new(540.0, 430.0, InfrastructureKind::Mailbox),
    InfrastructurePlacement::new(200.0, 360.0, InfrastructureKind::Hydrant),
    InfrastructurePlacement::new(700.0, 400.0, InfrastructureKind::Hydrant),
    InfrastructurePlacement::new(560.0, 520.0, InfrastructureKind::Bench),
    InfrastructurePlacement::new(60.0, 300.0, InfrastructureKind::Bench),
];

pub const SIGNS: [SignPlacement; 4] = [
    SignPlacement::new(610.0, 520.0, SignKind::Parking),
    SignPlacement::new(730.0, 320.0, SignKind::Bus),
    SignPlacement::new(280.0, 470.0, SignKind::Cafe),
    SignPlacement::new(420.0, 380.0, SignKind::Parking),
];

pub const ELEMENTS: [ElementPlacement; 6] = [
    ElementPlacement::new(250.0, 470.0, ElementKind::Planter),
    ElementPlacement::new(520.0, 545.0, ElementKind::Bollard),
    ElementPlacement::new(530.0, 545.0, ElementKind::Bollard),
    ElementPlacement::new(760.0, 560.0, ElementKind::Bin),
    ElementPlacement::new(40.0, 330.0, ElementKind::Planter),
    ElementPlacement::new(880.0, 450.0, ElementKind::Bin),
];

pub const SMALL_ELEMENTS: [SmallElementsPlacement; 4] = [
    SmallElementsPlacement::new(330.0, 250.0, 6),
    SmallElementsPlacement::new(720.0, 300.0, 5),
    SmallElementsPlacement::new(100.0, 500.0, 6),
    SmallElementsPlacement::new(380.0, 60.0, 4),
];

pub const CATHEDRAL: LandmarkPlacement = LandmarkPlacement::new(150.0, 230.0, 1.0);
pub const INDUSTRIAL: LandmarkPlacement = LandmarkPlacement::new(780.0, 240.0, 1.0);

pub const GLASS_TOWERS: [GlassTowerPlacement; 3] = [
    GlassTowerPlacement::new(470.0, 225.0, 1.0, GlassTint::Blue),
    GlassTowerPlacement::new(525.0, 235.0, 0.8, GlassTint::Teal),
    GlassTowerPlacement::new(415.0, 240.0, 0.7, GlassTint::Amber),
];

pub const PUB: PubPlacement = PubPlacement { origin: Vec2::new(380.0, 430.0), name: PUB_NAME };

// ── plan ──────────────────────────────────────────────────────────────────

/// Decoration category, one per renderer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Category {
    Texture,
    Border,
    Patch,
    Crosswalk,
    RowCluster,
    UrbanBuilding,
    Tree,
    Flag,
    TrafficLight,
    RoadSign,
    Infrastructure,
    Sign,
    Element,
    SmallElements,
    Cathedral,
    Industrial,
    GlassTower,
    Pub,
}

/// One entry of the background plan.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Decoration {
    /// Ground fill over the given area.
    Texture(Rect),
    Border(BorderBuilding),
    Patch(PatchPlacement),
    Crosswalk(CrosswalkPlacement),
    RowCluster(RowHouseCluster),
    UrbanBuilding(UrbanBuildingPlacement),
    Tree(TreePlacement),
    Flag(FlagPlacement),
    TrafficLight(TrafficLightPlacement),
    RoadSign(RoadSignPlacement),
    Infrastructure(InfrastructurePlacement),
    Sign(SignPlacement),
    Element(ElementPlacement),
    SmallElements(SmallElementsPlacement),
    Cathedral(LandmarkPlacement),
    Industrial(LandmarkPlacement),
    GlassTower(GlassTowerPlacement),
    Pub(PubPlacement),
}

impl Decoration {
    pub fn category(&self) -> Category {
        match self {
            Decoration::Texture(_) => Category::Texture,
            Decoration::Border(_) => Category::Border,
            Decoration::Patch(_) => Category::Patch,
            Decoration::Crosswalk(_) => Category::Crosswalk,
            Decoration::RowCluster(_) => Category::RowCluster,
            Decoration::UrbanBuilding(_) => Category::UrbanBuilding,
            Decoration::Tree(_) => Category::Tree,
            Decoration::Flag(_) => Category::Flag,
            Decoration::TrafficLight(_) => Category::TrafficLight,
            Decoration::RoadSign(_) => Category::RoadSign,
            Decoration::Infrastructure(_) => Category::Infrastructure,
            Decoration::Sign(_) => Category::Sign,
            Decoration::Element(_) => Category::Element,
            Decoration::SmallElements(_) => Category::SmallElements,
            Decoration::Cathedral(_) => Category::Cathedral,
            Decoration::Industrial(_) => Category::Industrial,
            Decoration::GlassTower(_) => Category::GlassTower,
            Decoration::Pub(_) => Category::Pub,
        }
    }

    /// Draws this decoration with its renderer.
    pub fn draw(&self, s: &mut dyn Surface) {
        match *self {
            Decoration::Texture(area) => art::draw_texture(s, area),
            Decoration::Border(b) => art::draw_border_building(s, b.body, Color::hex(b.facade)),
            Decoration::Patch(p) => art::draw_decoration_patch(s, p.center),
            Decoration::Crosswalk(c) => art::draw_crosswalk(s, c.origin, c.length, c.stripes, c.orientation),
            Decoration::RowCluster(c) => art::draw_row_cluster(s, c.center, c.count, c.variant),
            Decoration::UrbanBuilding(u) => art::draw_urban_building(s, u.base, u.width, u.height, u.kind),
            Decoration::Tree(t) => art::draw_tree(s, t.base, t.size),
            Decoration::Flag(f) => art::draw_flag(s, f.base, f.scale, f.style),
            Decoration::TrafficLight(t) => art::draw_traffic_light(s, t.base, t.scale, t.lit),
            Decoration::RoadSign(r) => art::draw_road_sign(s, r.base, r.scale, r.kind),
            Decoration::Infrastructure(i) => art::draw_infrastructure(s, i.base, i.kind),
            Decoration::Sign(g) => art::draw_sign(s, g.base, g.kind),
            Decoration::Element(e) => art::draw_element(s, e.base, e.kind),
            Decoration::SmallElements(e) => art::draw_small_elements(s, e.center, e.count),
            Decoration::Cathedral(l) => art::draw_cathedral(s, l.base, l.scale),
            Decoration::Industrial(l) => art::draw_industrial_towers(s, l.base, l.scale),
            Decoration::GlassTower(g) => art::draw_glass_tower(s, g.base, g.scale, g.tint),
            Decoration::Pub(p) => art::draw_pub(s, p.origin, p.name),
        }
    }
}

/// Every decoration of the background in paint order.
pub fn background_plan() -> Vec<Decoration> {
    let mut plan = vec![Decoration::Texture(CANVAS.bounds())];

    plan.extend(BORDER_TOP.iter().chain(&BORDER_BOTTOM).copied().map(Decoration::Border));
    plan.extend(PATCHES.map(Decoration::Patch));
    plan.extend(CROSSWALKS.map(Decoration::Crosswalk));
    plan.extend(ROW_CLUSTERS.map(Decoration::RowCluster));
    plan.extend(URBAN_BUILDINGS.map(Decoration::UrbanBuilding));
    plan.extend(TREES.map(Decoration::Tree));
    plan.extend(FLAGS.map(Decoration::Flag));
    plan.extend(TRAFFIC_LIGHTS.map(Decoration::TrafficLight));
    plan.extend(ROAD_SIGNS.map(Decoration::RoadSign));
    plan.extend(INFRASTRUCTURE.map(Decoration::Infrastructure));
    plan.extend(SIGNS.map(Decoration::Sign));
    plan.extend(ELEMENTS.map(Decoration::Element));
    plan.extend(SMALL_ELEMENTS.map(Decoration::SmallElements));

    // Landmarks go on top of the street furniture.
    plan.push(Decoration::Cathedral(CATHEDRAL));
    plan.push(Decoration::Industrial(INDUSTRIAL));
    plan.extend(GLASS_TOWERS.map(Decoration::GlassTower));
    plan.push(Decoration::Pub(PUB));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(plan: &[Decoration], category: Category) -> usize {
        plan.iter().filter(|d| d.category() == category).count()
    }

    #[test]
    fn plan_holds_every_table() {
        let plan = background_plan();
        let expected = [
            (Category::Texture, 1),
            (Category::Border, 30),
            (Category::Patch, 8),
            (Category::Crosswalk, 3),
            (Category::RowCluster, 5),
            (Category::UrbanBuilding, 6),
            (Category::Tree, 12),
            (Category::Flag, 3),
            (Category::TrafficLight, 4),
            (Category::RoadSign, 4),
            (Category::Infrastructure, 8),
            (Category::Sign, 4),
            (Category::Element, 6),
            (Category::SmallElements, 4),
            (Category::Cathedral, 1),
            (Category::Industrial, 1),
            (Category::GlassTower, 3),
            (Category::Pub, 1),
        ];
        for (category, n) in expected {
            assert_eq!(count(&plan, category), n, "{category:?}");
        }
        assert_eq!(plan.len(), 104);
    }

    #[test]
    fn texture_first_pub_last() {
        let plan = background_plan();
        assert_eq!(plan.first(), Some(&Decoration::Texture(Rect::new(0.0, 0.0, 900.0, 600.0))));
        assert_eq!(plan.last().map(Decoration::category), Some(Category::Pub));
    }

    #[test]
    fn landmarks_follow_all_small_pieces() {
        let plan = background_plan();
        let first_landmark = plan.iter().position(|d| d.category() == Category::Cathedral).unwrap();
        assert!(plan[first_landmark..].iter().all(|d| matches!(
            d.category(),
            Category::Cathedral | Category::Industrial | Category::GlassTower | Category::Pub
        )));
    }

    // ── arguments per category ──

    fn collect<T>(plan: &[Decoration], pick: impl Fn(&Decoration) -> Option<T>) -> Vec<T> {
        plan.iter().filter_map(pick).collect()
    }

    #[test]
    fn border_arguments_are_fixed() {
        let plan = background_plan();
        let got = collect(&plan, |d| match d {
            Decoration::Border(b) => Some((b.body.origin.x, b.body.origin.y, b.body.size.x, b.body.size.y, b.facade)),
            _ => None,
        });
        let tops = [22.0, 18.0, 24.0, 20.0, 23.0, 19.0, 21.0, 24.0, 18.0, 22.0, 20.0, 23.0, 19.0, 24.0, 21.0];
        let bottoms = [20.0, 23.0, 19.0, 24.0, 18.0, 22.0, 21.0, 19.0, 24.0, 20.0, 23.0, 18.0, 22.0, 20.0, 24.0];
        let mut expected = Vec::new();
        for (i, h) in tops.into_iter().enumerate() {
            expected.push((6.0 + 59.0 * i as f32, 30.0 - h, 52.0, h, FACADES[i % 6]));
        }
        for (i, h) in bottoms.into_iter().enumerate() {
            expected.push((6.0 + 59.0 * i as f32, 596.0 - h, 52.0, h, FACADES[(i + 3) % 6]));
        }
        assert_eq!(got, expected);
    }

    #[test]
    fn scattered_piece_arguments_are_fixed() {
        let plan = background_plan();

        let patches = collect(&plan, |d| match d {
            Decoration::Patch(p) => Some((p.center.x, p.center.y)),
            _ => None,
        });
        assert_eq!(patches, [
            (60.0, 70.0),
            (300.0, 60.0),
            (870.0, 90.0),
            (170.0, 440.0),
            (450.0, 560.0),
            (800.0, 400.0),
            (30.0, 450.0),
            (640.0, 200.0),
        ]);

        let crosswalks = collect(&plan, |d| match d {
            Decoration::Crosswalk(c) => Some((c.origin.x, c.origin.y, c.length, c.stripes, c.orientation)),
            _ => None,
        });
        assert_eq!(crosswalks, [
            (300.0, 400.0, 20.0, 6, Orientation::Horizontal),
            (575.0, 330.0, 22.0, 5, Orientation::Vertical),
            (150.0, 300.0, 18.0, 5, Orientation::Horizontal),
        ]);

        let clusters = collect(&plan, |d| match d {
            Decoration::RowCluster(c) => Some((c.center.x, c.center.y, c.count, c.variant)),
            _ => None,
        });
        assert_eq!(clusters, [
            (90.0, 420.0, 3, 0),
            (270.0, 330.0, 4, 1),
            (640.0, 420.0, 2, 2),
            (810.0, 520.0, 3, 3),
            (220.0, 540.0, 2, 4),
        ]);

        let small = collect(&plan, |d| match d {
            Decoration::SmallElements(e) => Some((e.center.x, e.center.y, e.count)),
            _ => None,
        });
        assert_eq!(small, [(330.0, 250.0, 6), (720.0, 300.0, 5), (100.0, 500.0, 6), (380.0, 60.0, 4)]);
    }

    #[test]
    fn building_and_tree_arguments_are_fixed() {
        let plan = background_plan();

        let urban = collect(&plan, |d| match d {
            Decoration::UrbanBuilding(u) => Some((u.base.x, u.base.y, u.width, u.height, u.kind)),
            _ => None,
        });
        assert_eq!(urban, [
            (600.0, 300.0, 44.0, 60.0, UrbanBuildingKind::Office),
            (660.0, 300.0, 40.0, 46.0, UrbanBuildingKind::Shop),
            (330.0, 120.0, 44.0, 70.0, UrbanBuildingKind::Apartment),
            (560.0, 150.0, 36.0, 80.0, UrbanBuildingKind::Office),
            (700.0, 150.0, 40.0, 55.0, UrbanBuildingKind::Apartment),
            (560.0, 560.0, 40.0, 40.0, UrbanBuildingKind::Shop),
        ]);

        let trees = collect(&plan, |d| match d {
            Decoration::Tree(t) => Some((t.base.x, t.base.y, t.size)),
            _ => None,
        });
        assert_eq!(trees, [
            (40.0, 120.0, 1.0),
            (60.0, 250.0, 1.1),
            (240.0, 140.0, 0.9),
            (300.0, 200.0, 1.2),
            (380.0, 300.0, 1.0),
            (520.0, 360.0, 0.9),
            (700.0, 360.0, 1.1),
            (860.0, 380.0, 1.0),
            (860.0, 140.0, 0.8),
            (40.0, 540.0, 1.0),
            (320.0, 560.0, 0.9),
            (690.0, 560.0, 1.0),
        ]);
    }

    #[test]
    fn street_furniture_arguments_are_fixed() {
        let plan = background_plan();

        let flags = collect(&plan, |d| match d {
            Decoration::Flag(f) => Some((f.base.x, f.base.y, f.scale, f.style)),
            _ => None,
        });
        assert_eq!(flags, [
            (205.0, 90.0, 1.0, FlagStyle::Civic),
            (440.0, 420.0, 0.9, FlagStyle::Festival),
            (850.0, 250.0, 0.8, FlagStyle::Harbour),
        ]);

        let lights = collect(&plan, |d| match d {
            Decoration::TrafficLight(t) => Some((t.base.x, t.base.y, t.scale, t.lit)),
            _ => None,
        });
        assert_eq!(lights, [
            (350.0, 390.0, 1.0, Signal::Red),
            (560.0, 400.0, 1.0, Signal::Green),
            (160.0, 330.0, 0.9, Signal::Amber),
            (740.0, 470.0, 1.0, Signal::Red),
        ]);

        let road_signs = collect(&plan, |d| match d {
            Decoration::RoadSign(r) => Some((r.base.x, r.base.y, r.scale, r.kind)),
            _ => None,
        });
        assert_eq!(road_signs, [
            (250.0, 400.0, 1.0, RoadSignKind::Stop),
            (590.0, 230.0, 0.9, RoadSignKind::Yield),
            (480.0, 300.0, 1.0, RoadSignKind::OneWay),
            (130.0, 470.0, 0.9, RoadSignKind::Stop),
        ]);

        let infrastructure = collect(&plan, |d| match d {
            Decoration::Infrastructure(i) => Some((i.base.x, i.base.y, i.kind)),
            _ => None,
        });
        assert_eq!(infrastructure, [
            (270.0, 420.0, InfrastructureKind::Streetlight),
            (450.0, 370.0, InfrastructureKind::Streetlight),
            (620.0, 460.0, InfrastructureKind::Streetlight),
            (540.0, 430.0, InfrastructureKind::Mailbox),
            (200.0, 360.0, InfrastructureKind::Hydrant),
            (700.0, 400.0, InfrastructureKind::Hydrant),
            (560.0, 520.0, InfrastructureKind::Bench),
            (60.0, 300.0, InfrastructureKind::Bench),
        ]);

        let signs = collect(&plan, |d| match d {
            Decoration::Sign(g) => Some((g.base.x, g.base.y, g.kind)),
            _ => None,
        });
        assert_eq!(signs, [
            (610.0, 520.0, SignKind::Parking),
            (730.0, 320.0, SignKind::Bus),
            (280.0, 470.0, SignKind::Cafe),
            (420.0, 380.0, SignKind::Parking),
        ]);

        let elements = collect(&plan, |d| match d {
            Decoration::Element(e) => Some((e.base.x, e.base.y, e.kind)),
            _ => None,
        });
        assert_eq!(elements, [
            (250.0, 470.0, ElementKind::Planter),
            (520.0, 545.0, ElementKind::Bollard),
            (530.0, 545.0, ElementKind::Bollard),
            (760.0, 560.0, ElementKind::Bin),
            (40.0, 330.0, ElementKind::Planter),
            (880.0, 450.0, ElementKind::Bin),
        ]);
    }

    #[test]
    fn landmark_arguments_are_fixed() {
        let plan = background_plan();
        let landmarks = collect(&plan, |d| match d {
            Decoration::Cathedral(l) | Decoration::Industrial(l) => Some((d.category(), l.base.x, l.base.y, l.scale)),
            _ => None,
        });
        assert_eq!(landmarks, [(Category::Cathedral, 150.0, 230.0, 1.0), (Category::Industrial, 780.0, 240.0, 1.0)]);

        let towers = collect(&plan, |d| match d {
            Decoration::GlassTower(g) => Some((g.base.x, g.base.y, g.scale, g.tint)),
            _ => None,
        });
        assert_eq!(towers, [
            (470.0, 225.0, 1.0, GlassTint::Blue),
            (525.0, 235.0, 0.8, GlassTint::Teal),
            (415.0, 240.0, 0.7, GlassTint::Amber),
        ]);

        let pubs = collect(&plan, |d| match d {
            Decoration::Pub(p) => Some((p.origin.x, p.origin.y, p.name)),
            _ => None,
        });
        assert_eq!(pubs, [(380.0, 430.0, "The Crown & Anchor")]);
    }

    #[test]
    fn border_rows_sit_on_the_frame_edges() {
        for b in BORDER_TOP {
            assert_eq!(b.body.max().y, TOP_EDGE);
        }
        for b in BORDER_BOTTOM {
            assert_eq!(b.body.max().y, BOTTOM_EDGE);
        }
    }
}
