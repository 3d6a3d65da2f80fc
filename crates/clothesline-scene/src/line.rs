//! The clothesline. Owns every hung cloth.
//!
//! Cloths live in numbered slots along the rod. A new cloth takes the
//! lowest free slot; once every slot is taken, creation is declined and
//! nothing is built. Removing a cloth drops its buffers immediately.

use glam::Vec3;

use clothesline_material::MaterialCatalog;
use clothesline_mesh::GridLayout;
use clothesline_solver::{
    Clock, Cloth, ClothInfo, RandomTurbulence, SolverConfig, StepForces, StepReport,
    SystemClock, Turbulence,
};
use clothesline_telemetry::{EventBus, EventKind, SceneEvent};
use clothesline_types::{ClothError, ClothId, ClothResult};

use crate::layout::LineLayout;
use crate::params::SceneParams;

struct Hung {
    id: ClothId,
    cloth: Cloth,
}

/// A rod with a fixed number of slots and the cloths hung on it.
pub struct Clothesline {
    layout: LineLayout,
    config: SolverConfig,
    catalog: MaterialCatalog,
    slots: Vec<Option<Hung>>,
    /// Live ids, oldest first.
    hang_order: Vec<ClothId>,
    next_id: u32,
    selected_material: String,
    turbulence: Box<dyn Turbulence>,
    clock: Box<dyn Clock>,
    bus: EventBus,
    frame: u64,
}

impl Clothesline {
    /// Creates an empty line with the default material catalog, entropy-
    /// seeded turbulence, and a wall clock.
    pub fn new(layout: LineLayout, config: SolverConfig) -> ClothResult<Self> {
        layout.validate()?;
        config.validate()?;

        let capacity = layout.capacity();
        let turbulence = RandomTurbulence::from_entropy(config.turbulence_amplitude);
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            hang_order: Vec::with_capacity(capacity),
            next_id: 0,
            selected_material: SceneParams::default().selected_material,
            catalog: MaterialCatalog::with_defaults(),
            turbulence: Box::new(turbulence),
            clock: Box::new(SystemClock::new()),
            bus: EventBus::new(),
            frame: 0,
            layout,
            config,
        })
    }

    /// Replaces the material catalog.
    pub fn with_catalog(mut self, catalog: MaterialCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replaces the turbulence source.
    pub fn with_turbulence(mut self, turbulence: Box<dyn Turbulence>) -> Self {
        self.turbulence = turbulence;
        self
    }

    /// Replaces the time source that drives the ripple.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ─── Capacity ─────────────────────────────────────────────

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of cloths currently hung.
    pub fn len(&self) -> usize {
        self.hang_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hang_order.is_empty()
    }

    /// Returns true when the next creation would be declined.
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    // ─── Lifecycle ────────────────────────────────────────────

    /// Creates a cloth on an explicit grid at `anchor`.
    ///
    /// The capacity check runs before anything is built; a full line returns
    /// [`ClothError::LineFull`] and the line is unchanged.
    pub fn create_cloth(
        &mut self,
        width: f32,
        height: f32,
        segments_x: u32,
        segments_y: u32,
        material: &str,
        anchor: Vec3,
    ) -> ClothResult<ClothId> {
        let slot = self.reserve_slot(material)?;
        let preset = self.catalog.require(material)?.clone();
        let grid = GridLayout::new(width, height, segments_x, segments_y)?;

        let cloth = Cloth::new(grid, preset, anchor, &self.config);
        let id = ClothId(self.next_id);
        self.next_id += 1;

        tracing::info!(
            cloth = %id,
            material,
            slot,
            particles = cloth.particles().len(),
            constraints = cloth.constraints().len(),
            "cloth created"
        );

        self.slots[slot] = Some(Hung { id, cloth });
        self.hang_order.push(id);
        self.publish(EventKind::ClothAdded {
            cloth: id,
            material: material.to_string(),
            slot,
        });
        Ok(id)
    }

    /// Hangs a cloth of `material` on the next free slot.
    ///
    /// The cloth is built at the layout's spawn origin; its pinned corners
    /// are then lifted to the rod and shifted along it by the slot offset.
    pub fn hang(&mut self, material: &str) -> ClothResult<ClothId> {
        let layout = self.layout.clone();
        let id = self.create_cloth(
            layout.cloth_width,
            layout.cloth_height,
            layout.segments_x,
            layout.segments_y,
            material,
            layout.spawn_origin,
        )?;

        let slot = self.slot_of(id)?;
        let offset = layout.slot_offset(slot);
        if let Some(hung) = self.slots[slot].as_mut() {
            hung.cloth.hang_corners(offset, layout.rod_height);
        }
        tracing::debug!(cloth = %id, slot, offset, height = layout.rod_height, "corners hung");
        Ok(id)
    }

    /// Hangs a cloth of the selected material.
    pub fn hang_selected(&mut self) -> ClothResult<ClothId> {
        let material = self.selected_material.clone();
        self.hang(&material)
    }

    /// Takes down a specific cloth and releases its buffers.
    pub fn remove(&mut self, id: ClothId) -> ClothResult<()> {
        let slot = self.slot_of(id)?;
        // Dropped here.
        self.slots[slot] = None;
        self.hang_order.retain(|&live| live != id);

        tracing::info!(cloth = %id, slot, remaining = self.len(), "cloth removed");
        self.publish(EventKind::ClothRemoved { cloth: id, slot });
        Ok(())
    }

    /// Takes down the most recently hung cloth. No-op on an empty line.
    pub fn remove_last(&mut self) -> Option<ClothId> {
        let id = *self.hang_order.last()?;
        self.remove(id).ok()?;
        Some(id)
    }

    // ─── Material selection ───────────────────────────────────

    /// Remembers `name` for [`hang_selected`](Self::hang_selected).
    pub fn select_material(&mut self, name: &str) -> ClothResult<()> {
        self.catalog.require(name)?;
        tracing::debug!(material = name, "material selected");
        self.selected_material = name.to_string();
        Ok(())
    }

    pub fn selected_material(&self) -> &str {
        &self.selected_material
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    // ─── Simulation ───────────────────────────────────────────

    /// Steps one cloth with the given wind and rain, then flushes telemetry.
    pub fn simulate(
        &mut self,
        id: ClothId,
        wind: Vec3,
        rain: Vec3,
        dt: f32,
    ) -> ClothResult<StepReport> {
        let slot = self.slot_of(id)?;
        let forces = StepForces::new(wind, rain);
        let time = self.clock.now_seconds();

        let report = match self.slots[slot].as_mut() {
            Some(hung) => hung.cloth.simulate(&forces, dt, time, self.turbulence.as_mut()),
            None => return Err(ClothError::UnknownCloth(id.0)),
        };
        self.publish_step(id, dt, &report);
        self.bus.flush();
        Ok(report)
    }

    /// Steps every cloth in slot order with shared forces, then advances the
    /// frame counter and flushes telemetry.
    pub fn simulate_all(&mut self, forces: &StepForces, dt: f32) -> Vec<(ClothId, StepReport)> {
        let time = self.clock.now_seconds();
        let mut reports = Vec::with_capacity(self.len());

        for hung in self.slots.iter_mut().flatten() {
            let report = hung
                .cloth
                .simulate(forces, dt, time, self.turbulence.as_mut());
            reports.push((hung.id, report));
        }
        for (id, report) in &reports {
            self.publish_step(*id, dt, report);
        }

        self.frame += 1;
        self.bus.flush();
        reports
    }

    /// Advances the injected clock by `elapsed` real seconds.
    pub fn tick_clock(&mut self, elapsed: f64) {
        self.clock.tick(elapsed);
    }

    /// Current reading of the injected clock.
    pub fn time_seconds(&self) -> f64 {
        self.clock.now_seconds()
    }

    // ─── Queries ──────────────────────────────────────────────

    pub fn cloth(&self, id: ClothId) -> ClothResult<&Cloth> {
        self.slots
            .iter()
            .flatten()
            .find(|hung| hung.id == id)
            .map(|hung| &hung.cloth)
            .ok_or(ClothError::UnknownCloth(id.0))
    }

    pub fn cloth_mut(&mut self, id: ClothId) -> ClothResult<&mut Cloth> {
        self.slots
            .iter_mut()
            .flatten()
            .find(|hung| hung.id == id)
            .map(|hung| &mut hung.cloth)
            .ok_or(ClothError::UnknownCloth(id.0))
    }

    /// Slot index occupied by `id`.
    pub fn slot_of(&self, id: ClothId) -> ClothResult<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|hung| hung.id == id))
            .ok_or(ClothError::UnknownCloth(id.0))
    }

    /// Live ids in slot order.
    pub fn ids(&self) -> Vec<ClothId> {
        self.slots.iter().flatten().map(|hung| hung.id).collect()
    }

    /// `(id, slot, cloth)` for every hung cloth, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ClothId, usize, &Cloth)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, hung)| hung.as_ref().map(|h| (h.id, slot, &h.cloth)))
    }

    /// Flattened `[x, y, z, ...]` positions of one cloth, in grid order.
    pub fn positions(&self, id: ClothId) -> ClothResult<Vec<f32>> {
        Ok(self.cloth(id)?.interleaved_positions())
    }

    /// World positions of the two pinned corners of one cloth.
    pub fn pinned_corners(&self, id: ClothId) -> ClothResult<[Vec3; 2]> {
        Ok(self.cloth(id)?.pinned_corners())
    }

    pub fn info(&self, id: ClothId) -> ClothResult<ClothInfo> {
        Ok(self.cloth(id)?.info())
    }

    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Frames completed by [`simulate_all`](Self::simulate_all).
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // ─── Telemetry ────────────────────────────────────────────

    /// Event bus, for registering sinks.
    pub fn event_bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Dispatches any queued events to the sinks.
    pub fn flush_events(&mut self) -> usize {
        self.bus.flush()
    }

    // ─── Internals ────────────────────────────────────────────

    fn reserve_slot(&mut self, material: &str) -> ClothResult<usize> {
        match self.slots.iter().position(Option::is_none) {
            Some(slot) => Ok(slot),
            None => {
                let capacity = self.capacity();
                tracing::warn!(material, capacity, "exhausted space on the clothesline");
                self.publish(EventKind::PlacementDeclined {
                    material: material.to_string(),
                    capacity,
                });
                Err(ClothError::LineFull { capacity })
            }
        }
    }

    fn publish(&mut self, kind: EventKind) {
        self.bus.emit(SceneEvent::new(self.frame, kind));
        self.bus.flush();
    }

    fn publish_step(&self, cloth: ClothId, dt: f32, report: &StepReport) {
        tracing::trace!(
            cloth = %cloth,
            dt,
            error = report.relaxation.final_error,
            kinetic = report.kinetic_energy,
            "step"
        );
        self.bus.emit(SceneEvent::new(
            self.frame,
            EventKind::StepCompleted {
                cloth,
                dt,
                relaxation_error: report.relaxation.final_error,
                kinetic_energy: report.kinetic_energy,
                wall_time: report.wall_time,
            },
        ));
    }
}

impl std::fmt::Debug for Clothesline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clothesline")
            .field("layout", &self.layout)
            .field("cloths", &self.ids())
            .field("selected_material", &self.selected_material)
            .field("frame", &self.frame)
            .finish()
    }
}
