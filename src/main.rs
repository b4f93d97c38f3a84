use static_blog_frame::App;
use yew::prelude::*;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <>
            <App />
            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

fn main() {
    yew::Renderer::<Root>::new().render();
}
