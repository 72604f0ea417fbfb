/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at the debug and trace levels.
These are intended to help follow how a proposition came to be asserted, or why an evaluation succeeded.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [assertion](mod@crate::procedures::assert)
    pub const ASSERTION: &str = "assertion";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to the [world](crate::db::world)
    pub const WORLD: &str = "world";

    /// Logs related to [hypothetical worlds](crate::procedures::hypothetical)
    pub const HYPOTHETICAL: &str = "hypothetical";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";

    /// Logs related to [saturation](crate::procedures::assert::saturate)
    pub const SATURATION: &str = "saturation";
}
