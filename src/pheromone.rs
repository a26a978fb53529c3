use crate::config::PheromoneParams;
use crate::error::ConfigError;
use crate::vector::{Steering, Vec2};

/// Markers at or below this strength are dropped by `advance`
pub const VIABILITY_FLOOR: f32 = 0.05;

/// The two trail chemicals
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PheromoneKind {
    /// Laid while searching (optional)
    Search = 0,
    /// Laid by carriers heading home
    Return = 1,
}

impl PheromoneKind {
    pub const ALL: [PheromoneKind; 2] = [PheromoneKind::Search, PheromoneKind::Return];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PheromoneKind::Search => "search",
            PheromoneKind::Return => "return",
        }
    }
}

/// A single decaying deposit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub kind: PheromoneKind,
    pub strength: f32,
    pub max_strength: f32,
}

impl Marker {
    pub fn new(position: Vec2, kind: PheromoneKind, strength: f32) -> Self {
        Self {
            position,
            kind,
            strength,
            max_strength: strength,
        }
    }

    /// Strength weighted by linear distance falloff, 0 outside `radius`
    #[inline]
    pub fn influence_at(&self, position: Vec2, radius: f32) -> f32 {
        let distance = self.position.distance(position);
        if distance > radius || radius <= 0.0 {
            return 0.0;
        }
        (self.strength * (1.0 - distance / radius)).max(0.0)
    }

    /// Remaining fraction of the initial strength, for rendering
    #[inline]
    pub fn freshness(&self) -> f32 {
        if self.max_strength > 0.0 {
            (self.strength / self.max_strength).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// All live markers plus decay and query logic.
///
/// Markers live in a flat `Vec`; every query is a linear scan, which stays
/// cheap at a few hundred agents and the marker counts decay allows.
#[derive(Clone, Debug)]
pub struct PheromoneField {
    markers: Vec<Marker>,
    decay_rate: f32,
    influence_radius: f32,
}

impl PheromoneField {
    pub fn new(decay_rate: f32, influence_radius: f32) -> Result<Self, ConfigError> {
        Self::from_params(&PheromoneParams {
            decay_rate,
            influence_radius,
        })
    }

    pub fn from_params(params: &PheromoneParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            markers: Vec::with_capacity(4096),
            decay_rate: params.decay_rate,
            influence_radius: params.influence_radius,
        })
    }

    #[inline]
    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    #[inline]
    pub fn influence_radius(&self) -> f32 {
        self.influence_radius
    }

    /// Append a marker; no merging with nearby markers
    pub fn deposit(&mut self, position: Vec2, kind: PheromoneKind, strength: f32) {
        self.markers.push(Marker::new(position, kind, strength));
    }

    /// Decay every marker by `decay_rate * dt` and drop the spent ones
    pub fn advance(&mut self, dt: f32) {
        let loss = self.decay_rate * dt;
        let before = self.markers.len();
        self.markers.retain_mut(|m| {
            m.strength -= loss;
            m.strength > VIABILITY_FLOOR
        });
        tracing::trace!(pruned = before - self.markers.len(), live = self.markers.len(), "pheromones decayed");
    }

    /// Live markers of `kind` within `radius` of `position`
    pub fn query_nearby(
        &self,
        position: Vec2,
        kind: PheromoneKind,
        radius: f32,
    ) -> impl Iterator<Item = &Marker> + '_ {
        let radius_sq = radius * radius;
        self.markers
            .iter()
            .filter(move |m| m.kind == kind && (m.position - position).length_squared() <= radius_sq)
    }

    /// Weighted mean of the unit directions towards nearby markers of
    /// `kind`, and its strength in `[0, 1]`. The mean is not renormalized,
    /// so markers pulling apart give a shorter vector. Zero vector and 0
    /// when nothing contributes.
    pub fn influence(&self, position: Vec2, kind: PheromoneKind) -> (Vec2, f32) {
        let mut sum = Vec2::ZERO;
        let mut total_weight = 0.0;

        for marker in self.markers.iter().filter(|m| m.kind == kind) {
            let weight = marker.influence_at(position, self.influence_radius);
            if weight <= 0.0 {
                continue;
            }
            let direction = position.direction_to(marker.position);
            if direction.is_zero() {
                continue;
            }
            sum += direction * weight;
            total_weight += weight;
        }

        if total_weight > 0.0 {
            (sum / total_weight, total_weight.min(1.0))
        } else {
            (Vec2::ZERO, 0.0)
        }
    }

    /// All live markers, for rendering
    #[inline]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn count(&self, kind: PheromoneKind) -> usize {
        self.markers.iter().filter(|m| m.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}
