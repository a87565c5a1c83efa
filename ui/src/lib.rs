use std::rc::Rc;

use payloads::CmsClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod content;
pub mod hooks;
mod logs;
mod pages;
mod utils;

use components::layout::{Footer, Header};
use content::{ContentRuntime, DEFAULT_TTL, LocalStore, TimeSource};
use pages::{
    AboutPage, BlogPage, BlogPostPage, HomePage, NotFoundPage, PortfolioPage,
    PortfolioSectionPage,
};

// CMS endpoint - configurable via environment or same-origin fallback
pub fn get_cms_client() -> CmsClient {
    // Try environment variable first (set at build time)
    let address = option_env!("CMS_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (reverse-proxied content API)
            let window = web_sys::window().unwrap();
            window.location().origin().unwrap()
        });

    CmsClient::new(address, option_env!("CMS_API_KEY").map(String::from))
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();

    // One runtime per process: shared cache store, system clock, one
    // client. Hooks receive it through context, never through globals.
    let runtime = use_memo((), |_| {
        ContentRuntime::new(
            get_cms_client(),
            Rc::new(LocalStore::new(DEFAULT_TTL)),
            TimeSource::system(),
        )
    });

    html! {
        <ContextProvider<ContentRuntime> context={(*runtime).clone()}>
            <BrowserRouter>
                <div class="min-h-screen bg-white dark:bg-neutral-900 \
                            text-neutral-900 dark:text-neutral-100 \
                            transition-colors">
                    <Header />
                    <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 \
                                 py-8">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </BrowserRouter>
        </ContextProvider<ContentRuntime>>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/portfolio")]
    Portfolio,
    #[at("/portfolio/:section")]
    PortfolioSection { section: String },
    #[at("/journal")]
    Blog,
    #[at("/journal/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Portfolio => html! { <PortfolioPage /> },
        Route::PortfolioSection { section } => html! {
            <PortfolioSectionPage {section} />
        },
        Route::Blog => html! { <BlogPage /> },
        Route::BlogPost { slug } => html! { <BlogPostPage {slug} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
