use drape::{Axis, Cloth, ClothConfig, ClothDesc, ClothError, NoOpStepObserver, StepObserver, Vec3};
use drape::vec::Vec;

fn hanging(n: usize, size: f32) -> ClothDesc<f32> {
    ClothDesc {
        size,
        total_mass: 10.0,
        resolution: n,
        top_left: Vec3::new(-1.0, 6.0, 0.0),
        horizontal: Vec3::new(1.0, 0.0, 0.0),
        vertical: Vec3::new(0.0, -1.0, 0.0),
    }
}

/// Lies flat at y = 1, rows running along +z.
fn flat(n: usize, size: f32) -> ClothDesc<f32> {
    ClothDesc {
        size,
        total_mass: 4.0,
        resolution: n,
        top_left: Vec3::new(0.0, 1.0, 0.0),
        horizontal: Vec3::new(1.0, 0.0, 0.0),
        vertical: Vec3::new(0.0, 0.0, 1.0),
    }
}

fn run(cloth: &mut Cloth<f32>, frames: usize) {
    for _ in 0..frames {
        cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
}

#[test]
fn grid_of_four_has_unit_spacing() {
    let cloth = Cloth::new(&hanging(4, 3.0), &ClothConfig::new()).unwrap();
    assert_eq!(cloth.particle_count(), 16);
    assert_eq!(cloth.triangle_count(), 18);
    assert_eq!(cloth.spacing(), 1.0);

    let origin = cloth.position_at(0, 0).unwrap();
    assert_eq!(cloth.position_at(1, 0).unwrap() - origin, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(cloth.position_at(0, 1).unwrap() - origin, Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(cloth.position_at(3, 3).unwrap() - origin, Vec3::new(3.0, -3.0, 0.0));
}

#[test]
fn directions_are_normalized() {
    let mut desc = hanging(3, 2.0);
    desc.horizontal = Vec3::new(5.0, 0.0, 0.0);
    desc.vertical = Vec3::new(0.0, -0.25, 0.0);
    let cloth = Cloth::new(&desc, &ClothConfig::new()).unwrap();
    let diagonal = cloth.position_at(2, 2).unwrap() - cloth.position_at(0, 0).unwrap();
    assert!((diagonal - Vec3::new(2.0, -2.0, 0.0)).length() < 1e-6, "{:?}", diagonal);
}

#[test]
fn first_row_is_fixed() {
    let cloth = Cloth::new(&hanging(5, 2.0), &ClothConfig::new()).unwrap();
    assert_eq!(cloth.fixed_particle_num(), 5);
    for (i, p) in cloth.particles().iter().enumerate() {
        assert_eq!(p.is_fixed(), i < 5, "particle {}", i);
    }
}

#[test]
fn fixed_particles_stay_put() {
    let mut cloth = Cloth::new(&hanging(6, 2.0), &ClothConfig::new()).unwrap();
    let before: std::vec::Vec<_> = (0..6).map(|i| cloth.fixed_particle_pos(i).unwrap()).collect();
    let bottom_before = cloth.position_at(3, 5).unwrap();

    run(&mut cloth, 120);

    for (i, pos) in before.iter().enumerate() {
        assert_eq!(cloth.fixed_particle_pos(i).unwrap(), *pos);
    }
    assert_ne!(cloth.position_at(3, 5).unwrap(), bottom_before, "free particles should move");
}

#[test]
fn equilibrium_is_preserved_without_external_forces() {
    let config = ClothConfig::new().still_air();
    let mut cloth = Cloth::new(&flat(4, 3.0), &config).unwrap();
    let before = cloth.positions().to_vec();

    run(&mut cloth, 30);

    for (a, b) in before.iter().zip(cloth.positions()) {
        assert!((*a - *b).length() < 1e-6, "{:?} moved to {:?}", a, b);
    }
    let c = *cloth.coefficients();
    for spring in cloth.springs() {
        let f = spring.force(cloth.positions(), cloth.particles(), &c);
        assert!(f.length() <= c.epsilon);
    }
    for p in cloth.particles() {
        assert_eq!(p.velocity(), Vec3::zero());
    }
}

#[test]
fn cloth_settles_on_the_ground() {
    let config = ClothConfig::new().still_air().with_gravity(9.81).with_ground_height(4.0);
    let mut cloth = Cloth::new(&hanging(6, 5.0), &config).unwrap();

    run(&mut cloth, 180);

    let floor = cloth.ground_pos() + cloth.coefficients().epsilon;
    for pos in cloth.positions() {
        assert!(pos.y >= floor, "particle below ground: {:?}", pos);
    }
    // rows hanging past the ground rest on it
    assert!(cloth.positions().iter().any(|p| p.y == floor));
}

#[test]
fn normals_are_unit_after_a_step() {
    let mut cloth = Cloth::new(&hanging(7, 3.0), &ClothConfig::new()).unwrap();
    run(&mut cloth, 10);
    for n in cloth.normals() {
        assert!((n.length() - 1.0).abs() < 1e-5, "normal {:?}", n);
    }
}

#[test]
fn translate_moves_only_fixed_particles() {
    let mut cloth = Cloth::new(&hanging(4, 3.0), &ClothConfig::new()).unwrap();
    let before = cloth.positions().to_vec();

    cloth.translate_fixed_particles(Axis::Y, 0.5);

    for (i, (old, new)) in before.iter().zip(cloth.positions()).enumerate() {
        if i < 4 {
            assert_eq!(new.y, old.y + 0.5);
            assert_eq!(new.x, old.x);
            assert_eq!(new.z, old.z);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn translate_accepts_numeric_axis() {
    let mut cloth = Cloth::new(&hanging(3, 2.0), &ClothConfig::new()).unwrap();
    let before = cloth.fixed_particle_pos(0).unwrap();
    cloth.translate_fixed_particles(Axis::try_from(2).unwrap(), -0.25);
    assert_eq!(cloth.fixed_particle_pos(0).unwrap(), before + Vec3::new(0.0, 0.0, -0.25));
    assert_eq!(Axis::try_from(5), Err(ClothError::InvalidAxis(5)));
}

#[test]
fn rotation_is_rigid_about_the_midpoint() {
    let mut cloth = Cloth::new(&hanging(5, 4.0), &ClothConfig::new()).unwrap();
    cloth.translate_fixed_particles(Axis::Z, 0.3);
    let n = cloth.fixed_particle_num();
    let before: std::vec::Vec<_> = (0..n).map(|i| cloth.fixed_particle_pos(i).unwrap()).collect();
    let mid_before = (before[0] + before[n - 1]).scale(0.5);

    for (axis, angle) in [(Axis::Y, 0.4f32), (Axis::X, -1.1), (Axis::Z, 2.0)] {
        cloth.rotate_fixed_particles(axis, angle);
    }

    let after: std::vec::Vec<_> = (0..n).map(|i| cloth.fixed_particle_pos(i).unwrap()).collect();
    for i in 0..n {
        for j in 0..n {
            let d0 = before[i].distance(before[j]);
            let d1 = after[i].distance(after[j]);
            assert!((d0 - d1).abs() < 1e-4, "distance {}-{} changed: {} -> {}", i, j, d0, d1);
        }
    }
    let mid_after = (after[0] + after[n - 1]).scale(0.5);
    assert!((mid_after - mid_before).length() < 1e-5);
    assert_ne!(after[0], before[0]);
}

#[test]
fn quarter_turn_about_y_swings_the_edge() {
    let mut cloth = Cloth::new(&hanging(3, 2.0), &ClothConfig::new()).unwrap();
    cloth.rotate_fixed_particles(Axis::Y, core::f32::consts::FRAC_PI_2);
    // edge ran from x = -1 to x = 1 around (0, 6, 0); now it runs along z
    let first = cloth.fixed_particle_pos(0).unwrap();
    let last = cloth.fixed_particle_pos(2).unwrap();
    assert!((first - Vec3::new(0.0, 6.0, 1.0)).length() < 1e-5, "{:?}", first);
    assert!((last - Vec3::new(0.0, 6.0, -1.0)).length() < 1e-5, "{:?}", last);
}

#[test]
fn fixed_particle_editing() {
    let mut cloth = Cloth::new(&hanging(4, 3.0), &ClothConfig::new()).unwrap();
    assert_eq!(cloth.fixed_particle_pos(2), cloth.position_at(2, 0));
    assert_eq!(cloth.fixed_particle_pos(4), None);

    let target = Vec3::new(9.0, 9.0, 9.0);
    cloth.set_fixed_particle_pos(1, target).unwrap();
    assert_eq!(cloth.position_at(1, 0).unwrap(), target);

    assert_eq!(
        cloth.set_fixed_particle_pos(4, target),
        Err(ClothError::FixedParticleOutOfBounds { index: 4, count: 4 })
    );
}

#[test]
fn coefficient_accessors_round_trip() {
    let mut cloth = Cloth::new(&hanging(3, 2.0), &ClothConfig::new()).unwrap();
    assert_eq!(cloth.spring_const(), 1000.0);
    assert_eq!(cloth.damping_const(), 3.5);
    assert_eq!(cloth.gravity_acce(), 2.0);
    assert_eq!(cloth.fluid_density(), 1.225);
    assert_eq!(cloth.drag_const(), 1.0);
    assert_eq!(cloth.wind_velocity(), Vec3::new(0.5, 0.5, -2.5));

    cloth.set_spring_const(400.0);
    cloth.set_damping_const(1.0);
    cloth.set_gravity_acce(9.81);
    cloth.set_fluid_density(1.0);
    cloth.set_drag_const(0.5);
    cloth.set_wind_velocity(Vec3::new(1.0, 0.0, 0.0));
    cloth.set_ground_pos(-3.0);

    let c = cloth.coefficients();
    assert_eq!(c.spring_const, 400.0);
    assert_eq!(c.damping_const, 1.0);
    assert_eq!(c.gravity, 9.81);
    assert_eq!(c.fluid_density, 1.0);
    assert_eq!(c.drag_coeff, 0.5);
    assert_eq!(c.wind_velocity, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(cloth.ground_pos(), -3.0);
    assert_eq!(cloth.ground().level(), -3.0);
}

#[test]
fn mass_is_shared_evenly() {
    let mut cloth = Cloth::new(&hanging(4, 3.0), &ClothConfig::new()).unwrap();
    assert_eq!(cloth.mass(), 10.0);
    assert_eq!(cloth.coefficients().particle_mass, 10.0 / 16.0);

    cloth.set_mass(32.0).unwrap();
    assert_eq!(cloth.mass(), 32.0);
    assert_eq!(cloth.coefficients().particle_mass, 2.0);

    assert_eq!(cloth.set_mass(0.0), Err(ClothError::InvalidMass));
    assert_eq!(cloth.set_mass(-1.0), Err(ClothError::InvalidMass));
    assert_eq!(cloth.mass(), 32.0);
}

#[test]
fn wind_change_reaches_every_triangle() {
    let config = ClothConfig::new().still_air();
    let mut calm = Cloth::new(&flat(5, 2.0), &config).unwrap();
    let mut gusty = Cloth::new(&flat(5, 2.0), &config).unwrap();
    gusty.set_wind_velocity(Vec3::new(0.0, 5.0, 0.0));

    run(&mut calm, 5);
    run(&mut gusty, 5);

    // wind from below lifts every free particle of the flat sheet
    for (still, blown) in calm.positions().iter().zip(gusty.positions()).skip(5) {
        assert!(blown.y > still.y, "{:?} vs {:?}", blown, still);
    }
}

#[test]
fn invalid_descriptions_are_rejected() {
    let config = ClothConfig::new();

    let mut desc = hanging(1, 2.0);
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidGridDimensions));

    desc = hanging(3, 0.0);
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidSize));
    desc.size = f32::NAN;
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidSize));

    desc = hanging(3, 2.0);
    desc.total_mass = -5.0;
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidMass));
    desc.total_mass = f32::INFINITY;
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidMass));

    desc = hanging(3, 2.0);
    desc.vertical = Vec3::new(-2.0, 0.0, 0.0);
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::DegenerateDirections));
    desc.vertical = Vec3::zero();
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::DegenerateDirections));

    // 70_000^2 vertices cannot be addressed by u32 triangle indices
    desc = hanging(70_000, 2.0);
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidGridDimensions));
    desc.resolution = usize::MAX;
    assert_eq!(Cloth::new(&desc, &config).err(), Some(ClothError::InvalidGridDimensions));
}

#[test]
fn position_lookup_outside_grid_is_none() {
    let cloth = Cloth::new(&hanging(4, 3.0), &ClothConfig::new()).unwrap();
    assert_eq!(cloth.position_at(3, 3), Some(cloth.positions()[15]));
    assert_eq!(cloth.position_at(4, 0), None);
    assert_eq!(cloth.position_at(0, 4), None);
    assert_eq!(cloth.fixed_particle_pos(4), None);
}

#[test]
fn first_row_below_ground_is_clamped_onto_it() {
    let desc = ClothDesc {
        size: 4.0f32,
        total_mass: 10.0,
        resolution: 5,
        top_left: Vec3::new(0.0, 1.0, 0.0),
        horizontal: Vec3::new(1.0, -1.0, 0.0),
        vertical: Vec3::new(0.0, -1.0, 0.0),
    };
    let mut cloth = Cloth::new(&desc, &ClothConfig::new()).unwrap();
    let ground = cloth.ground_pos();
    assert_eq!(ground, 0.0);

    // the top row slopes down and hits the floor from column 2 on
    assert!(cloth.position_at(1, 0).unwrap().y > ground);
    for x in 2..5 {
        let p = cloth.position_at(x, 0).unwrap();
        assert_eq!(p.y, ground);
        assert!(cloth.particles()[x].is_fixed());
        assert_eq!(cloth.normals()[x], Vec3::new(0.0, -1.0, 0.0));
    }

    // h x v flattened onto the floor points along -z
    let plane_dir = Vec3::new(0.0, 0.0, -1.0);
    for y in 1..5 {
        for x in 1..5 {
            let above = cloth.position_at(x, y - 1).unwrap();
            let here = cloth.position_at(x, y).unwrap();
            assert!((here - (above + plane_dir)).length() < 1e-5, "({}, {}): {:?}", x, y, here);
            assert_eq!(cloth.normals()[y * 5 + x], Vec3::new(0.0, -1.0, 0.0));
        }
    }

    let fixed_before: std::vec::Vec<_> = (0..5).map(|i| cloth.fixed_particle_pos(i).unwrap()).collect();
    run(&mut cloth, 30);
    assert!(cloth.positions().iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()));
    for (i, before) in fixed_before.iter().enumerate() {
        assert_eq!(cloth.fixed_particle_pos(i).unwrap(), *before);
    }
}

#[derive(Default)]
struct CountingObserver {
    substeps: usize,
    normals: usize,
    completed: usize,
}

impl StepObserver for CountingObserver {
    fn on_substep(&mut self, substep: usize) {
        assert_eq!(substep, self.substeps % 12);
        self.substeps += 1;
    }

    fn on_normals_updated(&mut self) {
        self.normals += 1;
    }

    fn on_step_complete(&mut self) {
        self.completed += 1;
    }
}

#[test]
fn observer_sees_every_substep() {
    let config = ClothConfig::new().with_oversamples(12);
    let mut cloth = Cloth::new(&hanging(3, 2.0), &config).unwrap();
    let mut observer = CountingObserver::default();

    cloth.step(1.0 / 60.0, &mut observer);
    cloth.step(1.0 / 60.0, &mut observer);

    assert_eq!(observer.substeps, 24);
    assert_eq!(observer.normals, 2);
    assert_eq!(observer.completed, 2);
}
