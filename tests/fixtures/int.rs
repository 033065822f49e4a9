// Integer declarations for wrapper tests.

use crate::prelude::*;

// Add returns the sum of x and others.
//wrap:expr add x others... : Z3_mk_add x others...

// Lt returns l < r.
//
//wrap:expr lt:Bool l r : Z3_mk_lt l r

//wrap:expr neg Z3_mk_unary_minus x

// IntValue returns the integer v.
//wrap:expr int_value:Int ctx:Context v:i64 : Z3_mk_int64 v:i64 "ctx.int_sort().raw()"
