/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Worlds take a [WorldConfig](dbs::WorldConfig) derived from the config of a context, and pass a copy of this to each snapshot.

# Example

```rust
# use otter_nd::config::Config;
# use otter_nd::context::Context;
# use otter_nd::structures::proposition::Proposition;
let mut config = Config::default();
config.classical.value = false;

let mut the_context = Context::from_config(config);

let p = Proposition::atom("p");
let not_not_p = Proposition::negation(Proposition::negation(p.clone()));

assert!(the_context.assert(not_not_p).is_ok());
assert!(the_context.is_false(&p));
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Eliminate double negations on assertion, so reasoning is classical rather than intuitionistic.
    pub classical: ConfigOption<bool>,

    /// After each assertion, reapply the elimination rules of every asserted conditional and disjunction until nothing new is derived.
    ///
    /// Without saturation, elimination rules are applied only when the proposition they belong to is asserted.
    pub saturation: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            classical: ConfigOption {
                name: "classical",
                value: true,
            },

            saturation: ConfigOption {
                name: "saturation",
                value: true,
            },
        }
    }
}

impl Config {
    /// Every option of the config, for display.
    pub fn options(&self) -> [&ConfigOption<bool>; 2] {
        [&self.classical, &self.saturation]
    }
}
