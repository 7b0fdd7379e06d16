#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use ai_bt::{Node, TreeContext, TreeState};

#[derive(Debug, Default)]
pub struct Ctx {
    pub state: TreeState,
    pub executed: Vec<&'static str>,
    pub threat: bool,
}

impl TreeContext for Ctx {
    fn tree_state(&self) -> &TreeState {
        &self.state
    }

    fn tree_state_mut(&mut self) -> &mut TreeState {
        &mut self.state
    }
}

/// Leaf with a fixed (or threat-driven) evaluation result that records every call.
pub struct Leaf {
    pub name: &'static str,
    pub answer: Answer,
    pub evaluated: Rc<Cell<u32>>,
}

#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Always(bool),
    WhenThreat,
}

impl Leaf {
    pub fn new(name: &'static str, answer: Answer) -> (Self, Rc<Cell<u32>>) {
        let evaluated = Rc::new(Cell::new(0));
        let leaf = Self {
            name,
            answer,
            evaluated: Rc::clone(&evaluated),
        };
        (leaf, evaluated)
    }
}

impl Node<Ctx> for Leaf {
    fn evaluate(&self, ctx: &Ctx) -> bool {
        self.evaluated.set(self.evaluated.get() + 1);
        match self.answer {
            Answer::Always(value) => value,
            Answer::WhenThreat => ctx.threat,
        }
    }

    fn execute(&mut self, ctx: &mut Ctx) {
        ctx.executed.push(self.name);
    }
}
