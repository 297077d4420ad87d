// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Constructive seed heuristics.
//!
//! These produce a feasible tour quickly so the branch-and-bound engine can
//! start with a finite upper bound instead of the sentinel. Neither makes
//! any quality guarantee; both return `None` when they fail to find a
//! feasible tour at all, in which case the engine simply starts cold.

use peddler_bnb::num::SolverNumeric;
use peddler_model::{index::CityIndex, matrix::CostMatrix, tour::Tour};
use rand::{Rng, seq::SliceRandom};

/// Greedy nearest-neighbor construction.
///
/// From every possible start city: repeatedly follow the cheapest finite
/// edge to a not-yet-visited city (lowest index on ties), then close the
/// cycle. Returns the best tour over all starts, or `None` when greedy dead-
/// ends from every start — which can happen on sparse instances that still
/// have feasible tours.
pub fn nearest_neighbor_tour<T>(matrix: &CostMatrix<T>) -> Option<Tour<T>>
where
    T: SolverNumeric,
{
    let num_cities = matrix.num_cities();
    let mut best: Option<Tour<T>> = None;

    for start in matrix.cities() {
        let mut cycle = Vec::with_capacity(num_cities);
        let mut visited = vec![false; num_cities];
        cycle.push(start);
        visited[start.get()] = true;

        while cycle.len() < num_cities {
            let current = cycle[cycle.len() - 1];
            let mut nearest: Option<(CityIndex, T)> = None;

            for candidate in matrix.cities() {
                if visited[candidate.get()] {
                    continue;
                }
                if let Some(cost) = matrix.cost(current, candidate).into_option() {
                    let closer = match nearest {
                        Some((_, best_cost)) => cost < best_cost,
                        None => true,
                    };
                    if closer {
                        nearest = Some((candidate, cost));
                    }
                }
            }

            match nearest {
                Some((next, _)) => {
                    visited[next.get()] = true;
                    cycle.push(next);
                }
                None => break, // greedy dead end from this start
            }
        }

        if cycle.len() < num_cities {
            continue;
        }

        if let Ok(tour) = Tour::from_cycle(matrix, cycle) {
            let better = match &best {
                Some(current) => tour.cost() < current.cost(),
                None => true,
            };
            if better {
                best = Some(tour);
            }
        }
    }

    best
}

/// Random-permutation restarts.
///
/// Samples uniform city permutations until one is a feasible tour or the
/// attempt budget is exhausted. On dense instances the first attempt almost
/// always succeeds; on sparse ones this degrades gracefully to `None`.
pub fn random_tour<T, R>(
    matrix: &CostMatrix<T>,
    rng: &mut R,
    max_attempts: usize,
) -> Option<Tour<T>>
where
    T: SolverNumeric,
    R: Rng + ?Sized,
{
    let mut cycle: Vec<CityIndex> = matrix.cities().collect();

    for _ in 0..max_attempts {
        cycle.shuffle(rng);
        if let Ok(tour) = Tour::from_cycle(matrix, cycle.clone()) {
            return Some(tour);
        }
    }

    None
}
