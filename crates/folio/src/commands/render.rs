//! `folio render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use folio_config::{CliSettings, Config, ThemeVariant};
use folio_theme::{
    ArchiveYear, AuthorProfile, Category, Comment, Image, PageRef, Paginated, Post,
    RenderContext, Theme, Viewer, build_theme,
};
use serde::Deserialize;

use crate::error::CliError;

/// Which fragment to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum View {
    /// List of posts, with pagination.
    Posts,
    /// A single post with links to its neighbours.
    Post,
    /// Comment list.
    Comments,
    /// Image gallery.
    Gallery,
    /// Category list.
    Categories,
    /// Archive list.
    Archives,
    /// Author biography.
    Author,
}

impl View {
    fn name(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Post => "post",
            Self::Comments => "comments",
            Self::Gallery => "gallery",
            Self::Categories => "categories",
            Self::Archives => "archives",
            Self::Author => "author",
        }
    }
}

/// Built-in theme selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum VariantArg {
    Blog,
    Foundation,
}

impl From<VariantArg> for ThemeVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Blog => Self::Blog,
            VariantArg::Foundation => Self::Foundation,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// View to render.
    #[arg(value_enum)]
    view: View,

    /// JSON file with the content to render.
    #[arg(long)]
    content: PathBuf,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render posts in the small (summary) form.
    #[arg(long)]
    small: bool,

    /// Maximum number of comments to show (0 shows all).
    #[arg(long, default_value_t = 0)]
    comment_limit: usize,

    /// Theme to render with (overrides config).
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Gallery thumbnail width (overrides config).
    #[arg(long)]
    thumb_width: Option<u32>,

    /// Gallery thumbnail height (overrides config).
    #[arg(long)]
    thumb_height: Option<u32>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content cannot be loaded, or the
    /// content file lacks what the view needs.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            variant: self.variant.map(ThemeVariant::from),
            thumb_width: self.thumb_width,
            thumb_height: self.thumb_height,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let content = ContentFile::load(&self.content)?;
        let theme = build_theme(&config.theme);
        let ctx = content.context(&config);

        let html = render_view(
            self.view,
            &content,
            theme.as_ref(),
            &ctx,
            self.small,
            self.comment_limit,
        )?;
        tracing::info!(view = self.view.name(), bytes = html.len(), "Rendered view");

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

/// Content and request details loaded from JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ContentFile {
    page: PageRef,
    editable: bool,
    viewer: Viewer,
    page_num: usize,
    url_segment: Option<String>,
    posts: Option<Paginated<Post>>,
    post: Option<Post>,
    next: Option<PageRef>,
    prev: Option<PageRef>,
    comments: Option<Vec<Comment>>,
    images: Option<Vec<Image>>,
    categories: Option<Vec<Category>>,
    archives: Option<Vec<ArchiveYear>>,
    author: Option<AuthorProfile>,
}

impl ContentFile {
    fn load(path: &Path) -> Result<Self, CliError> {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| CliError::ContentParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn context(&self, config: &Config) -> RenderContext {
        let mut ctx = RenderContext::new(self.page.clone())
            .with_editable(self.editable)
            .with_viewer(self.viewer.clone())
            .with_site(config.site_resolved.clone())
            .with_page_num(self.page_num);
        if let Some(segment) = &self.url_segment {
            ctx = ctx.with_url_segment(segment.as_str());
        }
        ctx
    }
}

fn require<'a, T>(
    value: Option<&'a T>,
    view: View,
    field: &'static str,
) -> Result<&'a T, CliError> {
    value.ok_or(CliError::MissingContent {
        view: view.name(),
        field,
    })
}

/// Render `view` from `content` with `theme`.
fn render_view(
    view: View,
    content: &ContentFile,
    theme: &dyn Theme,
    ctx: &RenderContext,
    small: bool,
    comment_limit: usize,
) -> Result<String, CliError> {
    let html = match view {
        View::Posts => theme.posts(require(content.posts.as_ref(), view, "posts")?, small, ctx),
        View::Post => {
            let post = require(content.post.as_ref(), view, "post")?;
            let mut html = theme.post(post, small, ctx);
            if content.next.is_some() || content.prev.is_some() {
                html.push_str(&theme.link_next_prev(content.next.as_ref(), content.prev.as_ref()));
            }
            html
        }
        View::Comments => {
            let comments = require(content.comments.as_ref(), view, "comments")?;
            theme.comments(comments, comment_limit, ctx)
        }
        View::Gallery => match (&content.images, &content.post) {
            (Some(images), _) => theme.gallery(images),
            (None, Some(post)) => theme.gallery(&post.images),
            (None, None) => {
                return Err(CliError::MissingContent {
                    view: view.name(),
                    field: "images",
                });
            }
        },
        View::Categories => {
            theme.categories(require(content.categories.as_ref(), view, "categories")?)
        }
        View::Archives => {
            theme.archives(require(content.archives.as_ref(), view, "archives")?, ctx)
        }
        View::Author => theme.author_bio(require(content.author.as_ref(), view, "author")?, ctx),
    };
    Ok(html)
}
