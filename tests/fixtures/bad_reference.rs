// Lt returns l < r.
//wrap:expr lt:Bool l r : Z3_mk_lt l rr
