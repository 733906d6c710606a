#[cfg(test)]
pub(crate) fn with_scoped_env<F, R>(vars: &[(&str, Option<&str>)], func: F) -> R
where
    F: FnOnce() -> R,
{
    static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
    let _guard = ENV_MUTEX.lock().expect("env lock");
    let previous = vars
        .iter()
        .map(|(name, value)| {
            let old = std::env::var(name).ok();
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
            (name.to_string(), old)
        })
        .collect::<Vec<_>>();
    let result = func();
    for (name, old) in previous {
        match old {
            Some(value) => std::env::set_var(&name, value),
            None => std::env::remove_var(&name),
        }
    }
    result
}
