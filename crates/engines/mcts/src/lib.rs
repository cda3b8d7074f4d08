//! Monte Carlo Tree Search engine.
//!
//! The classic four-step loop — select by UCT, expand one untried
//! move, simulate a uniformly random game to its end, backpropagate
//! the payout — over an index-based node arena. The engine never
//! mutates the shared `GameState`; every node owns a private copy, so
//! it can be interleaved with the deterministic engines.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use ponder_core::{Color, Engine, GameState, Move, SearchResult, TimeBudget};

#[derive(Clone, Copy, Debug)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations.
    pub iterations: u32,
    /// Exploration constant C in the UCT formula.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            iterations: 250,
            exploration: 2.0,
        }
    }
}

/// One tree node: accumulated payout, visit count, the explored
/// (move, child) pairs and the legal moves not yet expanded.
struct Node {
    payout: f64,
    visits: u32,
    parent: Option<usize>,
    children: Vec<(Move, usize)>,
    untried: Vec<Move>,
    state: GameState,
}

impl Node {
    fn new(mut state: GameState, parent: Option<usize>) -> Node {
        let untried = state.get_valid_moves();
        Node {
            payout: 0.0,
            visits: 0,
            parent,
            children: Vec::new(),
            untried,
            state,
        }
    }

    /// No moves left to expand and none ever explored: the game ends
    /// here. Checked before the leaf test — a terminal node must never
    /// reach the expansion step.
    fn is_terminal(&self) -> bool {
        self.untried.is_empty() && self.children.is_empty()
    }

    /// A node with untried moves is a frontier leaf.
    fn is_leaf(&self) -> bool {
        !self.untried.is_empty()
    }
}

pub struct MctsEngine {
    config: MctsConfig,
    rng: StdRng,
}

impl MctsEngine {
    pub fn new(config: MctsConfig) -> MctsEngine {
        MctsEngine {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible engine: a fixed seed and iteration count yield the
    /// same move for the same position.
    pub fn with_seed(config: MctsConfig, seed: u64) -> MctsEngine {
        MctsEngine {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// UCT: exploitation plus exploration. The parent visit count is
    /// floored at one so the logarithm is defined before the first
    /// backpropagation reaches it.
    fn uct(&self, node: &Node, parent_visits: u32) -> f64 {
        let visits = node.visits.max(1) as f64;
        node.payout / visits
            + self.config.exploration * ((parent_visits.max(1) as f64).ln() / visits).sqrt()
    }

    /// Descend from the root choosing the highest-UCT child until a
    /// terminal node or a frontier leaf is reached.
    fn select(&self, tree: &[Node], root: usize) -> usize {
        let mut idx = root;
        loop {
            let node = &tree[idx];
            if node.is_terminal() || node.is_leaf() {
                return idx;
            }
            let mut best = None;
            let mut best_value = f64::NEG_INFINITY;
            for &(_, child) in &node.children {
                let value = self.uct(&tree[child], node.visits);
                if value > best_value {
                    best_value = value;
                    best = Some(child);
                }
            }
            idx = best.expect("non-terminal interior node has children");
        }
    }

    /// Pop one untried move, apply it to a copy of the node's board and
    /// attach the resulting child.
    fn expand(&mut self, tree: &mut Vec<Node>, idx: usize) -> usize {
        let mv = tree[idx].untried.pop().expect("expand on exhausted node");
        let mut state = tree[idx].state.clone();
        state.make_move(mv);
        let child = Node::new(state, Some(idx));
        let child_idx = tree.len();
        tree.push(child);
        tree[idx].children.push((mv, child_idx));
        child_idx
    }

    /// Play uniformly random legal moves to the end of the game.
    /// Payout is from the searching side's perspective: 1 for a win,
    /// 0 for a loss, 0.5 for any draw.
    fn simulate(&mut self, node: &Node, player: Color) -> f64 {
        let mut state = node.state.clone();
        loop {
            if state.drawn() {
                return 0.5;
            }
            let moves = state.get_valid_moves();
            if moves.is_empty() {
                if state.checkmate() {
                    return if state.side_to_move() == player { 0.0 } else { 1.0 };
                }
                return 0.5;
            }
            let mv = *moves.choose(&mut self.rng).expect("non-empty move list");
            state.make_move(mv);
        }
    }

    fn backpropagate(tree: &mut [Node], mut idx: usize, payout: f64) {
        loop {
            let node = &mut tree[idx];
            node.payout += payout;
            node.visits += 1;
            match node.parent {
                Some(parent) => idx = parent,
                None => break,
            }
        }
    }

    /// Run the iteration budget and pick the root child with the
    /// highest accumulated payout. The chosen move is matched back
    /// against the caller's legal-move list by coordinates; with no
    /// match (or no explored child scoring above zero) no move is
    /// returned and the caller falls back.
    pub fn find_best_move(
        &mut self,
        state: &GameState,
        valid_moves: &[Move],
    ) -> (Option<Move>, f64) {
        let player = state.side_to_move();
        let mut tree: Vec<Node> = vec![Node::new(state.clone(), None)];

        for _ in 0..self.config.iterations {
            let mut idx = self.select(&tree, 0);
            if !tree[idx].is_terminal() {
                idx = self.expand(&mut tree, idx);
            }
            let payout = self.simulate(&tree[idx], player);
            Self::backpropagate(&mut tree, idx, payout);
        }

        let mut best: Option<Move> = None;
        let mut best_payout = 0.0;
        for &(mv, child) in &tree[0].children {
            tracing::trace!(
                payout = tree[child].payout,
                visits = tree[child].visits,
                "explored root child"
            );
            if tree[child].payout > best_payout {
                best_payout = tree[child].payout;
                best = Some(mv);
            }
        }

        let matched = best.and_then(|chosen| {
            valid_moves
                .iter()
                .copied()
                .find(|m| m.same_squares(&chosen))
        });
        (matched, best_payout)
    }
}

impl Engine for MctsEngine {
    fn choose_move(&mut self, state: &mut GameState, valid_moves: &[Move]) -> SearchResult {
        let clock = TimeBudget::unlimited();
        let (best_move, payout) = self.find_best_move(state, valid_moves);
        SearchResult {
            best_move,
            score: payout,
            depth: 0,
            nodes: self.config.iterations as u64,
            elapsed: clock.elapsed(),
        }
    }

    fn name(&self) -> &str {
        "MCTS v1.0"
    }
}
