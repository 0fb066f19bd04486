use super::DungeonBuilder;
use crate::constants::DIRECTIONS;
use crate::types::{RoomCoord, RoomGraph};

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

impl DungeonBuilder {
    /// Builds the inter-room connectivity graph: a randomized depth-first
    /// traversal over the room grid, rooted at the center room. Every
    /// first visit adds one edge, so the result is a spanning tree.
    pub(super) fn generate_room_graph(&self, rng: &mut impl Rng) -> RoomGraph {
        let mut graph = RoomGraph::new(self.config.rooms_x, self.config.rooms_y);

        let root = RoomCoord::new(self.config.rooms_x / 2, self.config.rooms_y / 2);

        let mut visited = HashSet::new();
        visited.insert(root);

        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            // Re-shuffled on every visit, not once per room
            let mut directions = DIRECTIONS;
            directions.shuffle(rng);

            for direction in directions {
                let Some(neighbour) = current.towards(direction) else {
                    continue;
                };

                if !graph.contains(neighbour) || visited.contains(&neighbour) {
                    continue;
                }

                visited.insert(neighbour);
                graph.add_edge(current, neighbour);
                stack.push(neighbour);
            }
        }

        graph
    }
}
