use std::rc::Rc;

use yew::prelude::*;

use crate::content::catalog::Catalog;
use crate::content::model::{CategoryFilter, Project};
use crate::interaction::Interaction;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    on_select: Callback<String>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let onclick = {
        let id = props.project.id.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };
    let project = &props.project;

    html! {
        <div class="project-card" {onclick}>
            <img src={project.hero_image.clone()} alt={project.title.clone()} loading="lazy" referrerpolicy="no-referrer" />
            <div class="project-card-overlay">
                <p class="project-card-category">{project.category.label()}</p>
                <h3>{&project.title}</h3>
                <div class="project-card-rule" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub filter: CategoryFilter,
    pub on_interaction: Callback<Interaction>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let catalog = use_context::<Rc<Catalog>>();
    let Some(catalog) = catalog else {
        return html! {};
    };

    let on_select = {
        let on_interaction = props.on_interaction.clone();
        Callback::from(move |id: String| on_interaction.emit(Interaction::OpenProject(id)))
    };

    html! {
        <section id="projects" class="portfolio">
            <style>
                {r#"
                    .portfolio {
                        padding: 8rem 0;
                        background: var(--bg);
                    }
                    .portfolio-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .portfolio-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-end;
                        gap: 2rem;
                        margin-bottom: 6rem;
                    }
                    .portfolio-header h3 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        margin: 0;
                    }
                    .portfolio-filters {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 2rem;
                    }
                    .portfolio-filters button {
                        background: none;
                        border: none;
                        border-bottom: 1px solid transparent;
                        padding: 0 0 0.5rem;
                        font-size: 0.625rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.4);
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .portfolio-filters button:hover {
                        color: #fff;
                    }
                    .portfolio-filters button.active {
                        color: #fff;
                        border-bottom-color: var(--accent);
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .project-card {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        overflow: hidden;
                        cursor: pointer;
                        background: #171717;
                        transition: transform 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .project-card:hover {
                        transform: scale(0.98);
                    }
                    .project-card img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.7;
                        transition: all 0.7s;
                    }
                    .project-card:hover img {
                        opacity: 0.4;
                        transform: scale(1.1);
                    }
                    .project-card-overlay {
                        position: absolute;
                        inset: 0;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        background: linear-gradient(to top, rgba(10, 10, 10, 0.8), transparent);
                    }
                    .project-card-category {
                        font-size: 0.625rem;
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        color: var(--accent);
                        margin: 0 0 0.5rem;
                        opacity: 0;
                        transform: translateY(1rem);
                        transition: all 0.5s;
                    }
                    .project-card h3 {
                        font-family: var(--serif);
                        font-weight: 400;
                        font-size: 1.875rem;
                        margin: 0 0 1rem;
                        transform: translateY(1rem);
                        transition: transform 0.5s 75ms;
                    }
                    .project-card:hover .project-card-category,
                    .project-card:hover h3 {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .project-card-rule {
                        width: 3rem;
                        height: 1px;
                        background: var(--accent);
                        transition: width 0.7s;
                    }
                    .project-card:hover .project-card-rule {
                        width: 100%;
                    }
                    .portfolio-empty {
                        color: rgba(255, 255, 255, 0.4);
                        font-style: italic;
                    }
                    @media (max-width: 1023px) {
                        .project-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (max-width: 639px) {
                        .portfolio { padding: 5rem 0; }
                        .portfolio-header { flex-direction: column; align-items: flex-start; margin-bottom: 4rem; }
                        .project-grid { grid-template-columns: 1fr; gap: 1.5rem; }
                    }
                "#}
            </style>
            <div class="portfolio-inner">
                <div class="portfolio-header">
                    <div>
                        <h2 class="eyebrow">{"Selected Works"}</h2>
                        <h3>{"Portfolio"}</h3>
                    </div>
                    <div class="portfolio-filters">
                        { for CategoryFilter::options().map(|filter| {
                            let onclick = {
                                let on_interaction = props.on_interaction.clone();
                                Callback::from(move |_: MouseEvent| on_interaction.emit(Interaction::SetFilter(filter)))
                            };
                            html! {
                                <button class={classes!((filter == props.filter).then(|| "active"))} {onclick}>
                                    {filter.label()}
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="project-grid">
                    { for catalog.projects_in(props.filter).map(|project| html! {
                        <ProjectCard
                            key={project.id.clone()}
                            project={project.clone()}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>
                {
                    if catalog.projects_in(props.filter).next().is_none() {
                        html! { <p class="portfolio-empty">{"No projects in this category yet."}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}
