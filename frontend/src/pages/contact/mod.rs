mod panel;
mod repository;
mod view_model;

pub use panel::ContactPanel;
pub use repository::ContactRepository;

use leptos::*;

pub const CONTACT_EMAIL: &str = "hello@magmarine.in";

pub struct Office {
    pub name: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

pub const OFFICES: [Office; 5] = [
    Office {
        name: "KOCHI OFFICE",
        address: "FIDA TOWER, KK PADMANABHAN ROAD, ERNAKULAM NORTH, 682018",
        phone: "0484 214 3140",
    },
    Office {
        name: "CHENNAI OFFICE",
        address: "71, L&T SHIPBUILDING, KATTUPALLI, TAMIL NADU 600120",
        phone: "8714139489",
    },
    Office {
        name: "MANGLORE BRANCH",
        address: "CSBD, KASBA BENGRE, MANGALURU, KARNATAKA 575001",
        phone: "9961866395",
    },
    Office {
        name: "VIZAG BRANCH",
        address: "SITE OFFICE, HINDUSTAN SHIPYARD, VISAKHAPATNAM, ANDHRA PRADESH 530005",
        phone: "9539759593",
    },
    Office {
        name: "OVERSEAS BRANCH",
        address: "6A, LUMBARE AVE, KAMPALA, UGANDA",
        phone: "+256 752731787",
    },
];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <ContactPanel /> }
}
