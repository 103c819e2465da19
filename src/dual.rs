//! Non-mutating counterparts of mutating operations.
//!
//! Every mutating method `op(&mut self, ..)` of the number, vector and matrix
//! types has a counterpart `op_cloned(&self, ..)` that clones the receiver,
//! applies `op` to the clone and returns it. The counterparts are generated by
//! `cloned_forms!`, so the algorithm only exists once.

/// Generate `fn $cloned(&self, args..)` methods that clone the receiver and
/// apply the mutating method `$op` to the clone.
///
/// Infallible methods are written as `fn a_cloned = a(x: T) -> Self;`,
/// fallible ones as `fn b_cloned = b(x: T) -> Result<Self, E>;`.
macro_rules! cloned_forms {
    () => {};
    (
        $(#[$meta:meta])*
        fn $cloned:ident = $op:ident($($arg:ident: $ty:ty),*) -> Result<Self, $err:ty>;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $cloned(&self, $($arg: $ty),*) -> Result<Self, $err> {
            let mut c = self.clone();
            c.$op($($arg),*)?;
            Ok(c)
        }

        cloned_forms!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        fn $cloned:ident = $op:ident($($arg:ident: $ty:ty),*) -> Self;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        pub fn $cloned(&self, $($arg: $ty),*) -> Self {
            let mut c = self.clone();
            c.$op($($arg),*);
            c
        }

        cloned_forms!($($rest)*);
    };
}
