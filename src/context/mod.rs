/*!
The context, a convenience which holds a world together with a configuration.

The [procedures](crate::procedures) take a world explicitly, and the context passes its own world.
Any number of contexts may exist at once, each independent of the others.

# Example
```rust
# use otter_nd::context::Context;
# use otter_nd::config::Config;
# use otter_nd::structures::proposition::Proposition;
let mut the_context = Context::from_config(Config::default());

let p = Proposition::atom("p");
let q = Proposition::atom("q");
let r = Proposition::atom("r");

assert!(the_context.assert(Proposition::conjunction(p.clone(), q.clone())).is_ok());

assert!(the_context.is_true(&Proposition::disjunction(r.clone(), q.clone())));
assert!(the_context.is_false(&r));

the_context.reset();
assert!(the_context.world().is_empty());
```
*/

mod counters;
pub use counters::Counters;

use std::rc::Rc;

use crate::{
    config::Config,
    db::world::World,
    misc::log::targets::{self},
    procedures::{self},
    structures::proposition::Proposition,
    types::err::ErrorKind,
};

/// A world, with a configuration and counters.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context.
    pub counters: Counters,

    /// The world of the context.
    world: World,
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        for option in config.options() {
            log::debug!(target: targets::CONFIG, "{option}");
        }
        Context {
            world: World::from_config(&config),
            counters: Counters::default(),
            config,
        }
    }

    /// The world of the context.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Asserts the proposition to the world of the context.
    ///
    /// See [assert](fn@procedures::assert) for details.
    pub fn assert(&mut self, proposition: Rc<Proposition>) -> Result<(), ErrorKind> {
        self.counters.assertions += 1;
        let result = procedures::assert(proposition, &mut self.world);
        if result.is_err() {
            self.counters.refusals += 1;
        }
        result
    }

    /// Whether the proposition is true in the world of the context.
    ///
    /// See [eval](procedures::eval) for details.
    pub fn eval(&self, proposition: &Proposition) -> bool {
        procedures::eval(proposition, &self.world)
    }

    pub fn is_true(&self, proposition: &Proposition) -> bool {
        self.eval(proposition)
    }

    /// Whether the proposition is not true in the world of the context.
    ///
    /// Note, this is not the same as the negation of the proposition being true.
    pub fn is_false(&self, proposition: &Proposition) -> bool {
        !self.eval(proposition)
    }

    /// Removes every proposition from the world of the context.
    ///
    /// The configuration of the context is reapplied to the world, so changes made to the configuration since the world was created take effect.
    pub fn reset(&mut self) {
        self.world.reset();
        self.world.config = (&self.config).into();
    }
}
