// String declarations for wrapper tests.

// Concat returns the concatenation of x and other.
//wrap:expr concat Z3_mk_seq_concat x other...

// Length returns the length of x.
//wrap:expr length:Int x : Z3_mk_seq_length x
