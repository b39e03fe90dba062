use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo", version)]
#[command(about = "A simple todo CLI", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    Add {
        /// Text of the todo (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List all todos
    #[command(alias = "ls")]
    List,

    /// Mark a todo as done
    Done {
        /// Id of the todo, as shown by `list`
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
}
