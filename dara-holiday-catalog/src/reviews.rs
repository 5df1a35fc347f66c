use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub date: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Giovanni Angileri",
        rating: 5,
        text: "Un gioiello nel cuore di Marsala! L'appartamento è curato nei minimi dettagli, \
               pulitissimo e con un arredamento moderno che ti fa sentire subito a casa. La \
               posizione è perfetta per visitare il centro e le saline al tramonto. Torneremo \
               sicuramente!",
        date: "5 giorni fa",
    },
    Review {
        author: "Alessandro Corrao",
        rating: 5,
        text: "Ottima vacanza, alloggio molto comodo e confortevole",
        date: "4 settimane fa",
    },
    Review {
        author: "Joseph Culicchia",
        rating: 5,
        text: "Ho soggiornato in questo appartamento per le vacanze e ho avuto un'esperienza \
               davvero eccellente. Il posto è pulito, moderno e dotato di tutto il necessario \
               per un soggiorno confortevole. La cucina è ben fornita, il letto è molto comodo.",
        date: "4 settimane fa",
    },
    Review {
        author: "Alessandro Putzolu",
        rating: 5,
        text: "Valutazione 5 stelle.",
        date: "4 settimane fa",
    },
    Review {
        author: "Pippo Licata",
        rating: 5,
        text: "Valutazione 5 stelle.",
        date: "3 mesi fa",
    },
    Review {
        author: "Giuseppe",
        rating: 5,
        text: "Valutazione 5 stelle.",
        date: "3 mesi fa",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_stars() {
        assert!(REVIEWS.iter().all(|review| (1..=5).contains(&review.rating)));
    }
}
