use crate::coloring::color::Color;
use crate::coloring::levels::level_order;
use crate::coloring::probe::colors_within_radius_counted;
use crate::error::ColoringError;
use crate::graph::{tree_center, Graph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Strategy for the color-1 maximization phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseOnePolicy {
    /// Color every odd-indexed layer (0-based; layer 0 is the root) with
    /// color 1. Alternating layers are always at distance >= 2.
    Parity,
    /// Visit layers in descending order of vertex count and color a whole
    /// layer with color 1 whenever neither adjacent depth already carries
    /// it. Greedily maximizes the number of color-1 vertices.
    LargestLayerFirst,
}

/// Upper bound on the reusable color a Phase B search will try before
/// escaping to a uniquely used color.
///
/// Both forms appear in the original heuristic's variants, so the bound is
/// configuration rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReuseBound {
    /// Bound is `nodes / divisor`.
    NodeFraction { divisor: u32 },
    /// Bound is `2 * layer_count + 2`.
    LayerDerived,
}

impl ReuseBound {
    pub fn resolve(self, nodes: u32, layer_count: usize) -> u32 {
        match self {
            ReuseBound::NodeFraction { divisor } => nodes / divisor.max(1),
            ReuseBound::LayerDerived => layer_count as u32 * 2 + 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoringConfig {
    pub phase_one: PhaseOnePolicy,
    pub reuse_bound: ReuseBound,
    /// Optional cap on the total number of vertices visited across all
    /// conflict probes in one run. Once exhausted, remaining uncolored
    /// vertices take the unique-color escape instead of probing; output
    /// semantics are unchanged whenever the budget is not hit.
    pub probe_budget: Option<u64>,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        ColoringConfig {
            phase_one: PhaseOnePolicy::LargestLayerFirst,
            reuse_bound: ReuseBound::NodeFraction { divisor: 10 },
            probe_budget: None,
        }
    }
}

/// Result of one coloring run. `colors` is indexed by vertex id with slot 0
/// unused; after a successful run no entry in `1..=nodes` is `Uncolored`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColoringOutcome {
    pub root: u32,
    pub colors: Vec<Color>,
    pub uniquely_used: u32,
}

impl ColoringOutcome {
    pub fn color(&self, vertex: u32) -> Color {
        self.colors[vertex as usize]
    }

    fn vertex_colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().skip(1).copied()
    }

    /// Largest reusable color id assigned anywhere (0 when none were).
    pub fn max_reusable_color(&self) -> u32 {
        self.vertex_colors()
            .filter_map(Color::reusable_id)
            .max()
            .unwrap_or(0)
    }

    /// Total colors consumed: every reusable id up to the maximum plus one
    /// fresh color per uniquely colored vertex.
    pub fn total_colors(&self) -> u32 {
        self.max_reusable_color() + self.uniquely_used
    }

    /// How many vertices carry each reusable color id.
    pub fn color_histogram(&self) -> BTreeMap<u32, u32> {
        let mut histogram = BTreeMap::new();
        for id in self.vertex_colors().filter_map(Color::reusable_id) {
            *histogram.entry(id).or_insert(0) += 1;
        }
        histogram
    }

    /// Fraction of vertices colored with the cheap color 1.
    pub fn color_one_fraction(&self) -> f64 {
        let total = self.colors.len().saturating_sub(1);
        if total == 0 {
            return 0.0;
        }
        let ones = self
            .vertex_colors()
            .filter(|&c| c == Color::Reusable(1))
            .count();
        ones as f64 / total as f64
    }
}

/// Approximate packing-coloring engine for a single tree.
///
/// Owns the tree and the color assignment for the duration of one run;
/// `assign` consumes the engine and hands the assignment to the caller.
pub struct PackingColorer {
    graph: Graph,
    config: ColoringConfig,
    colors: Vec<Color>,
}

impl PackingColorer {
    pub fn new(graph: Graph, config: ColoringConfig) -> Self {
        let colors = vec![Color::Uncolored; graph.nodes as usize + 1];
        PackingColorer {
            graph,
            config,
            colors,
        }
    }

    /// Runs both coloring phases from `root`, or from the tree center when
    /// no root is given.
    pub fn assign(mut self, root: Option<u32>) -> Result<ColoringOutcome, ColoringError> {
        if self.graph.nodes == 0 {
            return Err(ColoringError::EmptyGraph);
        }

        let root = root.unwrap_or_else(|| tree_center(&self.graph));
        let layers = level_order(&self.graph, root)?;

        let covered: usize = layers.iter().map(Vec::len).sum();
        if covered != self.graph.nodes as usize {
            return Err(ColoringError::DisconnectedGraph {
                nodes: self.graph.nodes,
                edges: self.graph.edge_count(),
            });
        }

        match self.config.phase_one {
            PhaseOnePolicy::Parity => self.maximize_color_one_parity(&layers),
            PhaseOnePolicy::LargestLayerFirst => self.maximize_color_one_largest(&layers),
        }

        let uniquely_used = self.assign_remaining(&layers);

        Ok(ColoringOutcome {
            root,
            colors: self.colors,
            uniquely_used,
        })
    }

    fn color_layer_with_one(&mut self, layer: &[u32]) {
        for &vertex in layer {
            self.colors[vertex as usize] = Color::Reusable(1);
        }
    }

    fn maximize_color_one_parity(&mut self, layers: &[Vec<u32>]) {
        for depth in (1..layers.len()).step_by(2) {
            self.color_layer_with_one(&layers[depth]);
        }
    }

    fn maximize_color_one_largest(&mut self, layers: &[Vec<u32>]) {
        let mut order: Vec<usize> = (0..layers.len()).collect();
        order.sort_by(|&a, &b| layers[b].len().cmp(&layers[a].len()));

        let mut colored = vec![false; layers.len()];
        for depth in order {
            // Adjacency is judged by original depth, not sorted position.
            if Self::depth_open_for_color_one(depth, &colored) {
                colored[depth] = true;
                self.color_layer_with_one(&layers[depth]);
            }
        }
    }

    fn depth_open_for_color_one(depth: usize, colored: &[bool]) -> bool {
        let deepest = colored.len() - 1;
        let shallower_clear = depth == 0 || !colored[depth - 1];
        let deeper_clear = depth == deepest || !colored[depth + 1];
        shallower_clear && deeper_clear
    }

    /// Phase B: bounded search from the deepest layer upward.
    ///
    /// Returns the number of uniquely used colors consumed.
    fn assign_remaining(&mut self, layers: &[Vec<u32>]) -> u32 {
        let bound = self
            .config
            .reuse_bound
            .resolve(self.graph.nodes, layers.len());
        let mut budget = self.config.probe_budget;
        let mut uniquely_used = 0u32;

        for layer in layers.iter().rev() {
            // Phase A colors whole layers, so the first vertex tells whether
            // this layer can be skipped outright.
            if self.colors[layer[0] as usize] == Color::Reusable(1) {
                continue;
            }

            for &candidate in layer {
                if self.colors[candidate as usize].is_colored() {
                    continue;
                }
                if !self.try_reusable_color(candidate, bound, &mut budget) {
                    self.colors[candidate as usize] = Color::Unique;
                    uniquely_used += 1;
                }
            }
        }

        uniquely_used
    }

    /// Searches for the smallest reusable color valid at `candidate`.
    ///
    /// Probes at radius `c` for each candidate color `c`; a set gathered at
    /// a smaller radius is a subset of any larger-radius probe, so a cached
    /// hit rules the color out without re-probing. Gives up (returns false)
    /// once `c` exceeds the configured bound or the probe budget runs dry.
    fn try_reusable_color(
        &mut self,
        candidate: u32,
        bound: u32,
        budget: &mut Option<u64>,
    ) -> bool {
        let mut color = 1u32;
        let mut found: HashSet<u32> = HashSet::new();
        let hard_cap = self.graph.nodes.max(2);

        while color < hard_cap {
            if !found.contains(&color) {
                if matches!(*budget, Some(0)) {
                    return false;
                }

                let (set, cost) =
                    colors_within_radius_counted(&self.graph, &self.colors, candidate, color);
                if let Some(remaining) = budget {
                    *remaining = remaining.saturating_sub(cost);
                }
                found = set;

                if !found.contains(&color) {
                    self.colors[candidate as usize] = Color::Reusable(color);
                    return true;
                }
            }

            color += 1;
            if color > bound {
                return false;
            }
        }

        false
    }
}
