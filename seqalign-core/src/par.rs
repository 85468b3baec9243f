/// Evaluate two independent closures, in parallel when the `parallel` feature is on.
macro_rules! par_join {
    ($a:expr, $b:expr) => {{
        #[cfg(feature = "parallel")]
        {
            rayon::join($a, $b)
        }
        #[cfg(not(feature = "parallel"))]
        {
            (($a)(), ($b)())
        }
    }};
}
