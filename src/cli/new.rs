use std::fs;
use std::io::{BufRead, Write};

use crate::editor;
use crate::error::Result;
use crate::models::PostDraft;
use crate::prompt;
use crate::renderer;

/// Scaffold a new blog post
pub fn run(author: String, prompt_author: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let draft = collect(&mut input, &mut output, author, prompt_author)?;

    let slug = draft.slug();
    let path = draft.path();

    // Echo the computed tuple before touching the filesystem
    println!(
        "[{:?}, {:?}, {:?}, {:?}]",
        draft.title,
        slug,
        draft.date.format("%Y-%m-%d").to_string(),
        path.display().to_string()
    );

    // Create-or-truncate: an existing post at this path is replaced
    fs::write(&path, renderer::render(&draft))?;

    editor::maybe_handoff(&path)
}

/// Collect the draft fields interactively.
///
/// The author prompt sits between title and categories and is only
/// asked when `prompt_author` is set; otherwise the fixed `author`
/// value is recorded.
fn collect<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    author: String,
    prompt_author: bool,
) -> Result<PostDraft> {
    let title = prompt::ask(input, output, "Tell me the title of your post")?;

    let author = if prompt_author {
        prompt::ask(input, output, "Who are you?")?
    } else {
        author
    };

    let categories = prompt::ask(input, output, "Post categories?")?;

    Ok(PostDraft::new(title, author, categories))
}
