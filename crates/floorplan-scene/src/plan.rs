use floorplan_blocks::material::UnknownMaterial;
use floorplan_blocks::{Block, Material, MaterialCatalog, Rgb};
use floorplan_geom::Vec3;
use floorplan_mesh::{LightString, Screen};

use crate::scene::Scene;

/// Thickness of the floor slabs; furniture stands on top of them.
pub const FLOOR_HEIGHT: f32 = 2.0;

const WALL_THICKNESS: f32 = 10.0;
const OUTER_HEIGHT: f32 = 110.0;
const INNER_HEIGHT: f32 = 80.0;
const CUTAWAY_HEIGHT: f32 = 14.0;

const LAMP_WARM: Rgb = Rgb::from_u32(0xffd27a);
const LAMP_ROSE: Rgb = Rgb::from_u32(0xffb3a7);
const LAMP_CREAM: Rgb = Rgb::from_u32(0xfff1c1);
const SCREEN_GLOW: Rgb = Rgb::from_u32(0x8fd3ff);

struct Builder<'a> {
    catalog: &'a MaterialCatalog,
    scene: Scene,
}

impl Builder<'_> {
    fn m(&self, key: &str) -> Result<Material, UnknownMaterial> {
        self.catalog.resolve(key)
    }

    fn floor(&mut self, x: f32, z: f32, w: f32, d: f32, key: &str) -> Result<(), UnknownMaterial> {
        let m = self.m(key)?;
        self.scene.ground(Block::new(x, z, w, d, FLOOR_HEIGHT, m));
        Ok(())
    }

    /// Flat covering lying on the floor (rugs, mats).
    fn covering(&mut self, x: f32, z: f32, w: f32, d: f32, key: &str) -> Result<(), UnknownMaterial> {
        let m = self.m(key)?;
        self.scene
            .ground(Block::new(x, z, w, d, 1.0, m).elevated(FLOOR_HEIGHT));
        Ok(())
    }

    fn wall(&mut self, x: f32, z: f32, w: f32, d: f32, h: f32) -> Result<(), UnknownMaterial> {
        let m = self.m("wall")?;
        self.scene.wall(Block::new(x, z, w, d, h, m));
        Ok(())
    }

    /// Furniture standing on the floor, or on something `lift` units tall.
    #[allow(clippy::too_many_arguments)]
    fn put(
        &mut self,
        x: f32,
        z: f32,
        w: f32,
        d: f32,
        h: f32,
        lift: f32,
        key: &str,
    ) -> Result<(), UnknownMaterial> {
        let m = self.m(key)?;
        self.scene
            .block(Block::new(x, z, w, d, h, m).elevated(FLOOR_HEIGHT + lift));
        Ok(())
    }
}

/// The canonical floor plan with the builtin palette.
pub fn floor_plan() -> Result<Scene, UnknownMaterial> {
    floor_plan_with(&MaterialCatalog::builtin())
}

/// The canonical floor plan: an open living room and kitchen on the west side,
/// a hallway in the middle, and a bedroom and bathroom to the east.
///
/// The footprint spans x in -360..360 and z in -270..270. North (-z) and west
/// (-x) walls stand full height; the south and east walls are cut away low so
/// the rooms stay visible from the default camera.
pub fn floor_plan_with(catalog: &MaterialCatalog) -> Result<Scene, UnknownMaterial> {
    let t = WALL_THICKNESS;
    let mut b = Builder {
        catalog,
        scene: Scene::new(),
    };

    // Floors
    b.floor(-350.0, -260.0, 390.0, 180.0, "floor_tile")?;
    b.floor(-350.0, -80.0, 390.0, 340.0, "floor_wood")?;
    b.floor(50.0, -260.0, 70.0, 520.0, "floor_hall")?;
    b.floor(130.0, -260.0, 220.0, 300.0, "floor_carpet")?;
    b.floor(130.0, 50.0, 220.0, 210.0, "floor_tile")?;
    b.covering(-300.0, 20.0, 150.0, 160.0, "rug")?;
    b.covering(60.0, 215.0, 50.0, 35.0, "doormat")?;

    // Outer walls
    b.wall(-360.0, -270.0, 720.0, t, OUTER_HEIGHT)?;
    b.wall(-360.0, -260.0, t, 530.0, OUTER_HEIGHT)?;
    b.wall(-350.0, 260.0, 405.0, t, CUTAWAY_HEIGHT)?;
    b.wall(115.0, 260.0, 245.0, t, CUTAWAY_HEIGHT)?;
    b.wall(350.0, -260.0, t, 520.0, CUTAWAY_HEIGHT)?;

    // Partitions, with door gaps
    b.wall(40.0, -260.0, t, 360.0, INNER_HEIGHT)?;
    b.wall(40.0, 160.0, t, 100.0, INNER_HEIGHT)?;
    b.wall(120.0, -260.0, t, 200.0, INNER_HEIGHT)?;
    b.wall(120.0, 0.0, t, 150.0, INNER_HEIGHT)?;
    b.wall(120.0, 200.0, t, 60.0, INNER_HEIGHT)?;
    b.wall(130.0, 40.0, 220.0, t, INNER_HEIGHT)?;

    // Kitchen
    b.put(-340.0, -258.0, 220.0, 40.0, 36.0, 0.0, "counter")?;
    b.put(-110.0, -258.0, 40.0, 40.0, 72.0, 0.0, "fridge")?;
    b.put(-340.0, -258.0, 220.0, 14.0, 30.0, 52.0, "cabinet")?;
    b.put(-250.0, -160.0, 100.0, 40.0, 36.0, 0.0, "counter")?;
    b.put(-60.0, -200.0, 80.0, 60.0, 30.0, 0.0, "dining_table")?;
    for x in [-52.0, -4.0] {
        b.put(x, -218.0, 16.0, 16.0, 18.0, 0.0, "chair")?;
        b.put(x, -138.0, 16.0, 16.0, 18.0, 0.0, "chair")?;
    }

    // Living room
    b.put(-345.0, 40.0, 30.0, 120.0, 20.0, 0.0, "tv_stand")?;
    let monitor = b.m("monitor")?;
    b.scene.screen(Screen {
        x: -338.0,
        y: FLOOR_HEIGHT + 20.0,
        z: 60.0,
        width: 6.0,
        depth: 80.0,
        height: 46.0,
        body: monitor,
        glow: SCREEN_GLOW,
    });
    b.put(-260.0, 70.0, 60.0, 60.0, 16.0, 0.0, "coffee_table")?;
    b.put(-150.0, 30.0, 60.0, 140.0, 22.0, 0.0, "sofa")?;
    b.put(-105.0, 30.0, 15.0, 140.0, 42.0, 0.0, "sofa")?;
    b.put(-145.0, 45.0, 14.0, 30.0, 10.0, 22.0, "cushion")?;
    b.put(-145.0, 125.0, 14.0, 30.0, 10.0, 22.0, "cushion")?;
    b.put(-340.0, 228.0, 24.0, 24.0, 20.0, 0.0, "planter")?;
    b.put(-337.0, 231.0, 18.0, 18.0, 34.0, 20.0, "plant")?;
    b.put(-20.0, 215.0, 50.0, 30.0, 60.0, 0.0, "shelf")?;
    b.scene.lights(LightString {
        start: Vec3::new(-346.0, 100.0, -70.0),
        end: Vec3::new(-346.0, 100.0, 250.0),
        count: 16,
        sag: 14.0,
        size: 3.0,
        colors: vec![LAMP_WARM, LAMP_ROSE, LAMP_CREAM],
    });

    // Hallway
    b.put(55.0, -240.0, 20.0, 80.0, 40.0, 0.0, "shelf")?;
    b.put(100.0, -200.0, 12.0, 50.0, 30.0, 0.0, "radiator")?;

    // Bedroom
    b.put(175.0, -258.0, 130.0, 8.0, 50.0, 0.0, "bed_frame")?;
    b.put(180.0, -250.0, 120.0, 160.0, 18.0, 0.0, "bed_frame")?;
    b.put(185.0, -245.0, 110.0, 150.0, 10.0, 18.0, "mattress")?;
    b.put(185.0, -175.0, 110.0, 80.0, 4.0, 28.0, "blanket")?;
    b.put(195.0, -240.0, 40.0, 22.0, 6.0, 28.0, "pillow")?;
    b.put(245.0, -240.0, 40.0, 22.0, 6.0, 28.0, "pillow")?;
    b.put(310.0, -240.0, 36.0, 100.0, 90.0, 0.0, "wardrobe")?;
    b.put(150.0, -40.0, 80.0, 40.0, 30.0, 0.0, "desk")?;
    b.scene.screen(Screen {
        x: 175.0,
        y: FLOOR_HEIGHT + 30.0,
        z: -32.0,
        width: 34.0,
        depth: 22.0,
        height: 2.0,
        body: monitor,
        glow: SCREEN_GLOW,
    });
    b.put(180.0, -5.0, 20.0, 20.0, 18.0, 0.0, "chair")?;
    b.scene.lights(LightString {
        start: Vec3::new(140.0, 95.0, -255.0),
        end: Vec3::new(340.0, 95.0, -255.0),
        count: 12,
        sag: 10.0,
        size: 3.0,
        colors: vec![LAMP_CREAM, LAMP_WARM],
    });

    // Bathroom
    b.put(140.0, 60.0, 70.0, 150.0, 24.0, 0.0, "bathtub")?;
    b.put(215.0, 60.0, 3.0, 150.0, 60.0, 0.0, "glass")?;
    b.put(300.0, 70.0, 30.0, 40.0, 18.0, 0.0, "toilet")?;
    b.put(260.0, 220.0, 80.0, 34.0, 32.0, 0.0, "vanity")?;

    // Labels sit just above the floor so furniture in front can hide them.
    let y = FLOOR_HEIGHT + 1.0;
    b.scene.label("KITCHEN", Vec3::new(-110.0, y, -100.0));
    b.scene.label("LIVING", Vec3::new(-220.0, y, 200.0));
    b.scene.label("HALL", Vec3::new(85.0, y, 60.0));
    b.scene.label("BEDROOM", Vec3::new(290.0, y, -20.0));
    b.scene.label("BATH", Vec3::new(280.0, y, 150.0));

    Ok(b.scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Element;

    #[test]
    fn builtin_plan_resolves_every_material() {
        let scene = floor_plan().unwrap();
        assert!(scene.len() > 50);
    }

    #[test]
    fn every_block_has_positive_extent() {
        let scene = floor_plan().unwrap();
        assert!(scene.blocks().all(|b| b.has_positive_extent()));
    }

    #[test]
    fn plan_stays_inside_footprint() {
        let scene = floor_plan().unwrap();
        for b in scene.blocks() {
            let a = b.aabb();
            assert!(a.min.x >= -360.0 && a.max.x <= 360.0, "{b:?}");
            assert!(a.min.z >= -270.0 && a.max.z <= 270.0, "{b:?}");
            assert!(a.min.y >= 0.0 && a.max.y <= OUTER_HEIGHT, "{b:?}");
        }
    }

    #[test]
    fn plan_names_four_rooms_and_a_hall() {
        let scene = floor_plan().unwrap();
        let names: Vec<&str> = scene.labels().map(|l| l.text.as_str()).collect();
        assert_eq!(names, ["KITCHEN", "LIVING", "HALL", "BEDROOM", "BATH"]);
    }

    #[test]
    fn plan_has_screens_and_fairy_lights() {
        let scene = floor_plan().unwrap();
        let screens = scene
            .elements()
            .iter()
            .filter(|e| matches!(e, Element::Screen(_)))
            .count();
        let lights = scene
            .elements()
            .iter()
            .filter(|e| matches!(e, Element::Lights(_)))
            .count();
        assert_eq!(screens, 2);
        assert_eq!(lights, 2);
    }

    #[test]
    fn missing_material_is_reported() {
        let mut cat = MaterialCatalog::new();
        for (key, m) in MaterialCatalog::builtin().materials {
            if key != "sofa" {
                cat.insert(key, m).unwrap();
            }
        }
        let err = floor_plan_with(&cat).unwrap_err();
        assert_eq!(err, UnknownMaterial("sofa".into()));
    }

    #[test]
    fn palette_override_changes_colors() {
        let mut cat = MaterialCatalog::builtin();
        cat.insert("sofa", Material::flat(Rgb::new(255, 0, 255))).unwrap();
        let scene = floor_plan_with(&cat).unwrap();
        assert!(scene.blocks().any(|b| b.material.base == Rgb::new(255, 0, 255)));
    }
}
