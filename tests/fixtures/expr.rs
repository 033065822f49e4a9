// Eq returns an expression that is true if l and r are equal.
//wrap:expr Eq:Bool Z3_mk_eq l r
