//! Mass-spring-damper cloth over an N x N particle grid.

use crate::coefficients::ClothCoefficients;
use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::ground::Ground;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::render::{DrawParams, MeshRenderer, MeshView};
use crate::spring::SpringDamper;
use crate::timer::FrameTimer;
use crate::triangle::Triangle;
use crate::vec::{Axis, Rotation3, Vec, Vec3};
use alloc::vec::Vec as AllocVec;

const CLOTH_COLOR: [f32; 3] = [0.9, 0.01, 0.01];

/// Shape and mass of a cloth.
#[derive(Clone, Debug)]
pub struct ClothDesc<F: Float> {
    /// Edge length along both grid directions.
    pub size: F,
    /// Mass of the whole cloth, spread evenly over the particles.
    pub total_mass: F,
    /// Particles per side (N). Must be at least 2.
    pub resolution: usize,
    /// Position of particle (0, 0).
    pub top_left: Vec3<F>,
    /// Direction of increasing column index. Normalized on construction.
    pub horizontal: Vec3<F>,
    /// Direction of increasing row index. Normalized on construction.
    pub vertical: Vec3<F>,
}

/// A cloth built from a grid of particles, spring-dampers and triangles.
///
/// Particle at (col, row) has index `row * N + col`; positions and normals
/// are stored in that order. The first row is fixed and only moves through
/// the `*_fixed_particle*` methods.
pub struct Cloth<F: Float> {
    positions: AllocVec<Vec3<F>>,
    normals: AllocVec<Vec3<F>>,
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<SpringDamper>,
    triangles: AllocVec<Triangle>,
    indices: AllocVec<[u32; 3]>,
    fixed: AllocVec<usize>,
    coefficients: ClothCoefficients<F>,
    total_mass: F,
    resolution: usize,
    oversamples: usize,
    max_frame_time: F,
    timer: FrameTimer,
    ground: Ground<F>,
    #[cfg(feature = "std")]
    epoch: std::time::Instant,
}

fn validate_mass<F: Float>(mass: F) -> Result<F, ClothError> {
    if mass.is_finite() && mass > F::zero() {
        Ok(mass)
    } else {
        Err(ClothError::InvalidMass)
    }
}

impl<F: Float> Cloth<F> {
    /// Build the grid, its springs and triangles, and fix the first row.
    ///
    /// Creates 2 triangles per quad, wound `(tl, bl, br)` and `(tl, br, tr)`,
    /// and per quad the springs:
    /// - Structural: top edge and left edge (rest = spacing)
    /// - Shear: both diagonals (rest = spacing * sqrt(2))
    /// - Structural closing edges on the last column and the last row
    ///
    /// Particles that would start below the ground continue the previous row
    /// horizontally instead, so a cloth hanging into the floor starts draped.
    pub fn new(desc: &ClothDesc<F>, config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let n = desc.resolution;
        if n < 2 {
            return Err(ClothError::InvalidGridDimensions);
        }
        // Every vertex must be addressable by a u32 triangle index.
        match n.checked_mul(n).map(u32::try_from) {
            Some(Ok(_)) => {}
            _ => return Err(ClothError::InvalidGridDimensions),
        }
        if !(desc.size.is_finite() && desc.size > F::zero()) {
            return Err(ClothError::InvalidSize);
        }
        let total_mass = validate_mass(desc.total_mass)?;

        let horizontal = desc.horizontal.normalize();
        let vertical = desc.vertical.normalize();
        // Negated comparison so NaN directions are rejected too.
        if !(horizontal.cross(vertical).length() >= config.epsilon) {
            return Err(ClothError::DegenerateDirections);
        }

        let spacing = desc.size / F::from_usize(n - 1);
        let particle_mass = total_mass / F::from_usize(n * n);
        let mut coefficients = ClothCoefficients::from_config(config, particle_mass, spacing);
        if coefficients.ground_height > desc.top_left.y {
            coefficients.ground_height = desc.top_left.y - coefficients.epsilon;
            log::debug!(
                "ground lowered to {} below cloth origin",
                coefficients.ground_height.to_f64()
            );
        }

        let (positions, normals) = place_particles(
            desc.top_left,
            horizontal,
            vertical,
            spacing,
            n,
            coefficients.ground_height,
        );

        let mut particles: AllocVec<Particle<F>> = (0..n * n).map(Particle::new).collect();

        let mut triangles = AllocVec::with_capacity(2 * (n - 1) * (n - 1));
        let mut springs = AllocVec::with_capacity(4 * (n - 1) * (n - 1) + 2 * (n - 1));
        for y in 0..(n - 1) {
            for x in 0..(n - 1) {
                let tl = y * n + x;
                let tr = tl + 1;
                let bl = tl + n;
                let br = bl + 1;

                triangles.push(Triangle::new(tl, bl, br));
                triangles.push(Triangle::new(tl, br, tr));

                springs.push(SpringDamper::structural(tl, tr));
                springs.push(SpringDamper::shear(tl, br));
                springs.push(SpringDamper::structural(tl, bl));
                springs.push(SpringDamper::shear(bl, tr));

                if x == n - 2 {
                    springs.push(SpringDamper::structural(tr, br));
                }
                if y == n - 2 {
                    springs.push(SpringDamper::structural(bl, br));
                }
            }
        }
        let indices = triangles
            .iter()
            .map(|t| [t.a as u32, t.b as u32, t.c as u32]) // in range, checked above
            .collect();

        let fixed: AllocVec<usize> = (0..n).collect();
        for &i in &fixed {
            particles[i].set_fixed(true);
        }

        let ground = Ground::new(
            Vec3::new(config.ground_corner.0, coefficients.ground_height, config.ground_corner.1),
            config.ground_extent,
        );

        log::debug!(
            "cloth {}x{}: {} springs, {} triangles, spacing {}",
            n,
            n,
            springs.len(),
            triangles.len(),
            spacing.to_f64()
        );

        Ok(Cloth {
            positions,
            normals,
            particles,
            springs,
            triangles,
            indices,
            fixed,
            coefficients,
            total_mass,
            resolution: n,
            oversamples: config.oversamples.max(1),
            max_frame_time: config.max_frame_time,
            timer: FrameTimer::new(0.0),
            ground,
            #[cfg(feature = "std")]
            epoch: std::time::Instant::now(),
        })
    }

    /// Advance the cloth by one frame of `frame_dt` seconds.
    ///
    /// The frame is split into `oversamples` substeps; each evaluates every
    /// spring, then every triangle's drag, then integrates every particle.
    /// Vertex normals are rebuilt once at the end.
    pub fn step<O: StepObserver>(&mut self, frame_dt: F, observer: &mut O) {
        let sub_dt = frame_dt / F::from_usize(self.oversamples);

        for sub in 0..self.oversamples {
            for spring in self.springs.iter() {
                spring.compute_force(&self.positions, &mut self.particles, &self.coefficients);
            }
            for triangle in self.triangles.iter() {
                triangle.compute_aerodynamic_force(
                    &self.positions,
                    &mut self.particles,
                    &self.coefficients,
                );
            }
            for p in self.particles.iter_mut() {
                p.integrate(&mut self.positions, &self.coefficients, sub_dt);
            }
            observer.on_substep(sub);
        }

        self.recompute_normals();
        observer.on_normals_updated();
        observer.on_step_complete();
    }

    /// Rebuild vertex normals as the normalized sum of adjacent face normals.
    ///
    /// Vertices with no non-degenerate face keep a zero normal.
    pub fn recompute_normals(&mut self) {
        for p in self.particles.iter() {
            p.reset_normal(&mut self.normals);
        }
        for triangle in self.triangles.iter() {
            triangle.compute_normal(
                &self.positions,
                &self.particles,
                &mut self.normals,
                self.coefficients.epsilon,
            );
        }
        for n in self.normals.iter_mut() {
            *n = n.normalize();
        }
    }

    /// Simulate the time elapsed since the previous frame, then hand the
    /// buffers to `renderer`.
    ///
    /// `now` is a timestamp in seconds on any monotonic clock; the first call
    /// measures from zero (see [`Cloth::reset_clock`]).
    pub fn update_at<R: MeshRenderer<F>>(&mut self, now: f64, renderer: &mut R) {
        let elapsed = F::from_f64(self.timer.tick(now));
        let frame_dt = if elapsed > self.max_frame_time {
            log::debug!(
                "frame time {}s clamped to {}s",
                elapsed.to_f64(),
                self.max_frame_time.to_f64()
            );
            self.max_frame_time
        } else {
            elapsed
        };
        self.step(frame_dt, &mut NoOpStepObserver);
        renderer.upload(&self.mesh());
    }

    /// [`Cloth::update_at`] driven by the wall clock.
    #[cfg(feature = "std")]
    pub fn update<R: MeshRenderer<F>>(&mut self, renderer: &mut R) {
        let now = self.epoch.elapsed().as_secs_f64();
        self.update_at(now, renderer);
    }

    /// Make `now` the reference timestamp for the next [`Cloth::update_at`].
    pub fn reset_clock(&mut self, now: f64) {
        self.timer.reset(now);
    }

    /// Submit the cloth, then the ground.
    pub fn draw<R: MeshRenderer<F>>(&self, renderer: &mut R, view_proj: &R::ViewProj) {
        let params = DrawParams {
            translation: Vec3::zero(),
            color: CLOTH_COLOR,
        };
        renderer.draw(&self.mesh(), &params, view_proj);
        self.ground.draw(renderer, view_proj);
    }

    pub fn translate_fixed_particles(&mut self, axis: Axis, shift: F) {
        let delta = Vec3::along(axis, shift);
        for &i in &self.fixed {
            self.positions[i] = self.positions[i] + delta;
        }
    }

    /// Rotate the fixed particles rigidly about the midpoint of the first and
    /// last of them.
    pub fn rotate_fixed_particles(&mut self, axis: Axis, angle: F) {
        let (first, last) = match (self.fixed.first(), self.fixed.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return,
        };
        let pivot = (self.positions[first] + self.positions[last]).scale(F::half());
        let rotation = Rotation3::about_axis(axis, angle);
        for &i in &self.fixed {
            self.positions[i] = rotation.rotate_about(self.positions[i], pivot);
        }
    }

    pub fn fixed_particle_num(&self) -> usize {
        self.fixed.len()
    }

    pub fn fixed_particle_pos(&self, index: usize) -> Option<Vec3<F>> {
        self.fixed.get(index).map(|&i| self.positions[i])
    }

    pub fn set_fixed_particle_pos(&mut self, index: usize, pos: Vec3<F>) -> Result<(), ClothError> {
        let count = self.fixed.len();
        let &i = self
            .fixed
            .get(index)
            .ok_or(ClothError::FixedParticleOutOfBounds { index, count })?;
        self.positions[i] = pos;
        Ok(())
    }

    /// Total mass of the cloth.
    pub fn mass(&self) -> F {
        self.total_mass
    }

    /// Change the total mass; every particle gets an equal share.
    pub fn set_mass(&mut self, total_mass: F) -> Result<(), ClothError> {
        self.total_mass = validate_mass(total_mass)?;
        self.coefficients.particle_mass = total_mass / F::from_usize(self.particles.len());
        log::debug!("particle mass now {}", self.coefficients.particle_mass.to_f64());
        Ok(())
    }

    pub fn gravity_acce(&self) -> F {
        self.coefficients.gravity
    }

    pub fn set_gravity_acce(&mut self, gravity: F) {
        self.coefficients.gravity = gravity;
    }

    pub fn ground_pos(&self) -> F {
        self.coefficients.ground_height
    }

    /// Move the collision height and the visual ground together.
    pub fn set_ground_pos(&mut self, height: F) {
        self.coefficients.ground_height = height;
        self.ground.set_ground_level(height);
        log::debug!("ground moved to {}", height.to_f64());
    }

    pub fn spring_const(&self) -> F {
        self.coefficients.spring_const
    }

    pub fn set_spring_const(&mut self, spring_const: F) {
        self.coefficients.spring_const = spring_const;
    }

    pub fn damping_const(&self) -> F {
        self.coefficients.damping_const
    }

    pub fn set_damping_const(&mut self, damping_const: F) {
        self.coefficients.damping_const = damping_const;
    }

    pub fn fluid_density(&self) -> F {
        self.coefficients.fluid_density
    }

    pub fn set_fluid_density(&mut self, fluid_density: F) {
        self.coefficients.fluid_density = fluid_density;
    }

    pub fn drag_const(&self) -> F {
        self.coefficients.drag_coeff
    }

    pub fn set_drag_const(&mut self, drag_coeff: F) {
        self.coefficients.drag_coeff = drag_coeff;
    }

    pub fn wind_velocity(&self) -> Vec3<F> {
        self.coefficients.wind_velocity
    }

    pub fn set_wind_velocity(&mut self, wind_velocity: Vec3<F>) {
        self.coefficients.wind_velocity = wind_velocity;
    }

    /// Frames counted by [`Cloth::update_at`] over the last full second.
    pub fn fps(&self) -> u32 {
        self.timer.fps()
    }

    pub fn mesh(&self) -> MeshView<'_, F> {
        MeshView {
            positions: &self.positions,
            normals: &self.normals,
            indices: &self.indices,
        }
    }

    pub fn positions(&self) -> &[Vec3<F>] { &self.positions }
    pub fn normals(&self) -> &[Vec3<F>] { &self.normals }
    pub fn indices(&self) -> &[[u32; 3]] { &self.indices }
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn springs(&self) -> &[SpringDamper] { &self.springs }
    pub fn triangles(&self) -> &[Triangle] { &self.triangles }
    pub fn coefficients(&self) -> &ClothCoefficients<F> { &self.coefficients }
    pub fn ground(&self) -> &Ground<F> { &self.ground }
    pub fn resolution(&self) -> usize { self.resolution }
    pub fn spacing(&self) -> F { self.coefficients.rest_length }
    pub fn oversamples(&self) -> usize { self.oversamples }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn triangle_count(&self) -> usize { self.triangles.len() }

    /// Position of the particle at grid column `col`, row `row`.
    pub fn position_at(&self, col: usize, row: usize) -> Option<Vec3<F>> {
        if col >= self.resolution || row >= self.resolution {
            return None;
        }
        self.positions.get(row * self.resolution + col).copied()
    }
}

/// Lay out grid positions and seed normals, continuing rows that would start
/// underground along the ground-parallel direction of the cloth plane.
fn place_particles<F: Float>(
    top_left: Vec3<F>,
    horizontal: Vec3<F>,
    vertical: Vec3<F>,
    spacing: F,
    n: usize,
    ground_height: F,
) -> (AllocVec<Vec3<F>>, AllocVec<Vec3<F>>) {
    let plane_dir = {
        let d = horizontal.cross(vertical);
        Vec3::new(d.x, F::zero(), d.z).normalize()
    };
    let seed_normal = vertical.cross(horizontal).normalize();

    let mut positions = AllocVec::with_capacity(n * n);
    let mut normals = AllocVec::with_capacity(n * n);
    let mut relocated = 0usize;
    for y in 0..n {
        for x in 0..n {
            let mut pos = top_left
                + horizontal.scale(F::from_usize(x) * spacing)
                + vertical.scale(F::from_usize(y) * spacing);
            let mut normal = seed_normal;
            if pos.y < ground_height {
                pos = if y > 0 {
                    positions[(y - 1) * n + x] + plane_dir.scale(spacing)
                } else {
                    pos.with_component(Axis::Y, ground_height)
                };
                normal = -Vec3::up();
                relocated += 1;
            }
            positions.push(pos);
            normals.push(normal);
        }
    }
    if relocated > 0 {
        log::debug!("{} particles relocated above the ground", relocated);
    }
    (positions, normals)
}
