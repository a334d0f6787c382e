use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::{
    about::About,
    case_study::CaseStudyView,
    contact::Contact,
    expertise::ExpertiseGrid,
    expertise_modal::ExpertiseModal,
    footer::Footer,
    hero::Hero,
    portfolio::Portfolio,
    progress_bar::ProgressBar,
    testimonial::StudioTestimonial,
};
use crate::content::catalog::Catalog;
use crate::interaction::{CaseStudy, Disclosure, ExpertiseDetail, Interaction, InteractionHandle};

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_context::<Rc<Catalog>>();
    let interaction = use_context::<InteractionHandle>();
    let (Some(catalog), Some(interaction)) = (catalog, interaction) else {
        warn!("Home rendered outside the catalog or interaction providers");
        return html! {};
    };

    let on_interaction = {
        let dispatcher = interaction.dispatcher();
        Callback::from(move |event: Interaction| dispatcher.dispatch(event))
    };
    let close_project = {
        let on_interaction = on_interaction.clone();
        Callback::from(move |_: ()| on_interaction.emit(Interaction::CloseProject))
    };
    let close_expertise = {
        let on_interaction = on_interaction.clone();
        Callback::from(move |_: ()| on_interaction.emit(Interaction::CloseExpertise))
    };

    let disclosed = match interaction.disclosure {
        Disclosure::Disclosed(index) => Some(index),
        Disclosure::None => None,
    };

    // The case study stacks above the expertise detail when both are open.
    let expertise_overlay = match interaction.expertise_detail {
        ExpertiseDetail::Open(index) => catalog.expertise_at(index).map(|item| html! {
            <ExpertiseModal item={item.clone()} on_close={close_expertise} />
        }),
        ExpertiseDetail::Closed => None,
    };
    let case_study_overlay = match &interaction.case_study {
        CaseStudy::Open(id) => catalog.project(id).map(|project| html! {
            <CaseStudyView project={project.clone()} on_close={close_project} />
        }),
        CaseStudy::Closed => None,
    };

    html! {
        <div class="home">
            <ProgressBar />
            <main>
                <Hero />
                <About />
                <Portfolio filter={interaction.filter} on_interaction={on_interaction.clone()} />
                <ExpertiseGrid {disclosed} on_interaction={on_interaction.clone()} />
                <StudioTestimonial />
                <Contact />
            </main>
            <Footer />
            { expertise_overlay.unwrap_or_else(|| html! {}) }
            { case_study_overlay.unwrap_or_else(|| html! {}) }
        </div>
    }
}
