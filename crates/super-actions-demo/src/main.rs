use anyhow::{Context, Result};
use super_actions::{args, create_map_dispatch_to_props, Action, BoundProps};
use super_actions_store::{combine_modules, Store, StoreConfig};

mod counter;
mod logger;
mod todos;

use counter::CounterActions;
use todos::TodoActions;

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting super-actions-demo, logging to {}", log_file.display());

    let config = StoreConfig::load().context("Failed to load store config")?;

    let counter_actions = CounterActions::new();
    let todo_actions = TodoActions::new();
    let root = combine_modules([
        counter::module(&counter_actions),
        todos::module(&todo_actions),
    ])?;
    let mut store = Store::from_modules(root, &config)?;

    // Actions given on the command line as JSON replace the scripted session
    let actions = std::env::args()
        .skip(1)
        .map(|arg| {
            serde_json::from_str::<Action>(&arg)
                .with_context(|| format!("Invalid action argument: {}", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    if actions.is_empty() {
        let props = create_map_dispatch_to_props([
            ("increment", counter_actions.increment.clone()),
            ("decrement", counter_actions.decrement.clone()),
            ("set_label", counter_actions.set_label.clone()),
            ("add_todo", todo_actions.add.clone()),
            ("toggle_todo", todo_actions.toggle.clone()),
            ("set_filter", todo_actions.set_filter.clone()),
        ])
        .bind(store.dispatcher().clone());
        run_session(&props)?;
        store.process_pending();
    } else {
        for action in actions {
            store.dispatch(action);
        }
    }

    println!("{}", serde_json::to_string_pretty(store.state())?);

    log::info!("Exiting super-actions-demo");
    Ok(())
}

fn run_session(props: &BoundProps) -> Result<()> {
    props.call("increment", &args![5])?;
    props.call("decrement", &args![2])?;
    props.call("set_label", &args!["presses"])?;
    props.call("add_todo", &args!["read the docs"])?;
    props.call("add_todo", &args!["dispatch an action"])?;
    props.call("toggle_todo", &args![0])?;
    props.call("set_filter", &args!["open"])?;
    Ok(())
}
