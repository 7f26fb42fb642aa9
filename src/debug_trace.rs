use cfg_if::cfg_if;

// NOTE: the macro is a no-op unless the `debug_trace` feature is enabled, so
// the traced expressions are never evaluated in regular builds.
cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @chars $action_descr:expr $(, $ch:expr)* ) => {
                print!(">{}", $action_descr);
                $( print!(": {:?}", $ch); )*
                println!();
            };

            ( @transition $from:expr, $to:expr ) => {
                println!("@transition {:?} -> {:?}", $from, $to);
            };

            ( @abort $kind:expr, $buffer:expr ) => {
                println!("@abort {:?}, falling back to text with {:?}", $kind, $buffer);
            };

            ( @output $token:expr ) => {
                println!("@output {:#?}", $token);
            };

            ( @skip $token:expr ) => {
                println!("@skip {:?}", $token);
            };

            ( @cancel $pos:expr ) => {
                println!("@cancel at position {}", $pos);
            };

            ( @end ) => {
                println!("@end");
            };
        }
    } else {
        macro_rules! trace {
            ( @$ty:ident $($args:expr),* ) => {};
        }
    }
}
