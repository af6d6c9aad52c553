//! Built-in content for the "Thirion household, September 2025" exercise
//!
//! Eleven scanned documents, the budget built from them and the quiz played
//! on top of both. Supplying a [`ContentBundle`] file replaces all of it.

use super::model::{
    Budget, BudgetEntry, BudgetTotals, ContentBundle, Document, Quiz, QuizQuestion,
};

const IMAGE_PREFIX: &str = "assets/images";

fn document(
    id: &str,
    titre: &str,
    kind: &str,
    page_pdf: u32,
    montants: &[f64],
    libelles: &[&str],
) -> Document {
    Document {
        id: id.to_string(),
        titre: titre.to_string(),
        kind: kind.to_string(),
        page_pdf,
        image_path: format!("{}/page_{}.png", IMAGE_PREFIX, page_pdf),
        montants: montants.to_vec(),
        libelles: libelles.iter().map(|s| s.to_string()).collect(),
    }
}

fn line(kind: &str, libelle: &str, montant_attendu: f64, source_doc_id: &str) -> BudgetEntry {
    BudgetEntry {
        kind: kind.to_string(),
        libelle: libelle.to_string(),
        montant_attendu,
        source_doc_id: source_doc_id.to_string(),
    }
}

fn question(
    id: &str,
    text: &str,
    doc_id: Option<&str>,
    options: &[&str],
    correct_index: usize,
    explication: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: text.to_string(),
        doc_id: doc_id.map(str::to_string),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_index,
        explication: explication.to_string(),
    }
}

/// The scanned documents, one entry per identifiable document
pub fn builtin_documents() -> Vec<Document> {
    vec![
        document(
            "assurance-voiture",
            "Avis d'échéance assurance voiture",
            "quittance_assurance",
            1,
            &[35.28],
            &[
                "Assurance voiture Ford Fiesta",
                "Responsabilité civile + Providis",
            ],
        ),
        document(
            "restaurant",
            "Souche TVA restaurant",
            "ticket_restaurant",
            2,
            &[50.00],
            &["Restaurant BVBA AULNENHOF"],
        ),
        document(
            "quittance-loyer",
            "Quittance de loyer",
            "quittance_loyer",
            2,
            &[746.00],
            &["Loyer appartement septembre"],
        ),
        document(
            "medecin",
            "Attestation de soins",
            "attestation_soins",
            3,
            &[28.25],
            &["Médecin générale - Dr. Lumen Marcelle"],
        ),
        document(
            "bus",
            "Abonnement bus",
            "carte_transport",
            4,
            &[48.50],
            &["Carte train 2e classe Liège-Hannut"],
        ),
        document(
            "proximus",
            "Facture Proximus",
            "facture_telephone",
            5,
            &[69.18],
            &["Abonnement et communications téléphone"],
        ),
        document(
            "ikea",
            "Ticket de caisse IKEA",
            "ticket_caisse",
            6,
            &[35.50],
            &["Meuble TV et vase"],
        ),
        document(
            "extrait-bancaire",
            "Extrait bancaire",
            "extrait_compte",
            7,
            &[352.52, 2.30, 61.76],
            &["Virement salaire", "Frais de gestion", "Luminus électricité"],
        ),
        document(
            "papeterie",
            "Facture papeterie",
            "facture",
            8,
            &[57.27],
            &["Maximum SA - fournitures de bureau"],
        ),
        document(
            "visa",
            "État des dépenses VISA",
            "releve_carte",
            9,
            &[12.00, 20.00, 18.00, 52.50, 168.00],
            &["Minimode", "Quick", "H&M", "Essence", "Carrefour alimentation"],
        ),
        document(
            "carrefour",
            "Ticket de caisse Carrefour",
            "ticket_supermarche",
            10,
            &[345.46],
            &["Courses alimentaires détaillées"],
        ),
    ]
}

/// The expected budget grid
pub fn builtin_budget() -> Budget {
    Budget {
        entrees: vec![
            line("revenu", "Salaire de Jules", 1750.00, "extrait-bancaire"),
            line("allocation", "Chômage de Julie", 352.52, "extrait-bancaire"),
        ],
        sorties_fixes: vec![
            line("fixe", "Loyer", 746.00, "quittance-loyer"),
            line("fixe", "Assurance voiture", 35.28, "assurance-voiture"),
            line("fixe", "Proximus", 69.18, "proximus"),
            line("fixe", "Frais de gestion", 2.30, "extrait-bancaire"),
            line("fixe", "Luminus", 61.76, "extrait-bancaire"),
        ],
        sorties_variables: vec![
            line("variable", "Restaurant", 50.00, "restaurant"),
            line("variable", "Médecin", 28.25, "medecin"),
            line("variable", "Carte de train", 48.50, "bus"),
            line("variable", "IKEA", 35.50, "ikea"),
            line("variable", "Papeterie", 57.27, "papeterie"),
            line("variable", "Alimentation", 533.46, "visa"),
            line("variable", "Habillement", 30.00, "visa"),
            line("variable", "Carburant", 52.50, "visa"),
        ],
        totaux: BudgetTotals {
            total_entrees: 2102.52,
            total_sorties: 1750.00,
            solde: 352.52,
        },
    }
}

const WHICH_DOCUMENT: &str = "De quel document s'agit-il ?";

/// Part 1 (document identification) and part 3 (synthesis) questions
pub fn builtin_quiz() -> Quiz {
    Quiz {
        partie1_documents: vec![
            question(
                "q1",
                WHICH_DOCUMENT,
                Some("assurance-voiture"),
                &[
                    "Une quittance d'assurance automobile",
                    "Une facture de garage",
                    "Un contrat de location",
                    "Une attestation d'achat",
                ],
                0,
                "C'est un avis d'échéance/quittance d'assurance auto (responsabilité civile + assistance)",
            ),
            question(
                "q2",
                WHICH_DOCUMENT,
                Some("restaurant"),
                &[
                    "Un ticket de caisse",
                    "Une souche TVA de restaurant",
                    "Une facture détaillée",
                    "Un bon de réduction",
                ],
                1,
                "C'est une souche TVA d'un restaurant",
            ),
            question(
                "q3",
                WHICH_DOCUMENT,
                Some("quittance-loyer"),
                &[
                    "Un contrat de bail",
                    "Une facture d'électricité",
                    "Une quittance de loyer",
                    "Un avis d'échéance",
                ],
                2,
                "C'est une quittance, remise lors du paiement du loyer en liquide (de moins en moins courant)",
            ),
            question(
                "q4",
                WHICH_DOCUMENT,
                Some("medecin"),
                &[
                    "Une ordonnance médicale",
                    "Une attestation de soins",
                    "Une facture d'hôpital",
                    "Un certificat médical",
                ],
                1,
                "C'est une attestation de soins remise par un médecin afin d'obtenir le remboursement à la mutuelle d'une partie de ses honoraires",
            ),
            question(
                "q5",
                WHICH_DOCUMENT,
                Some("bus"),
                &[
                    "Un ticket de bus simple",
                    "Un abonnement de transport mensuel",
                    "Une carte de réduction",
                    "Un billet de train",
                ],
                1,
                "C'est un abonnement de bus pour le mois de septembre",
            ),
            question(
                "q6",
                WHICH_DOCUMENT,
                Some("proximus"),
                &[
                    "Un contrat téléphonique",
                    "Une facture de téléphone",
                    "Un bon de commande",
                    "Une publicité",
                ],
                1,
                "C'est une facture de Proximus pour le téléphone",
            ),
            question(
                "q7",
                WHICH_DOCUMENT,
                Some("ikea"),
                &[
                    "Une facture avec TVA",
                    "Un ticket de caisse (preuve d'achat)",
                    "Un bon de livraison",
                    "Un devis",
                ],
                1,
                "C'est un ticket de caisse pour achat (preuve d'achat)",
            ),
            question(
                "q8",
                WHICH_DOCUMENT,
                Some("extrait-bancaire"),
                &[
                    "Un relevé de carte bancaire",
                    "Un extrait de compte bancaire",
                    "Une demande de crédit",
                    "Un virement",
                ],
                1,
                "C'est un extrait bancaire papier – permet de voir les différentes transactions entrées et sorties",
            ),
            question(
                "q9",
                "Quelle est la différence entre une facture et un ticket de caisse ?",
                Some("papeterie"),
                &[
                    "Il n'y a pas de différence",
                    "La facture est plus chère",
                    "La facture permet aux entreprises de récupérer la TVA",
                    "Le ticket est obligatoire",
                ],
                2,
                "La facture permet aux entreprises de récupérer la TVA, contrairement au simple ticket de caisse",
            ),
            question(
                "q10",
                WHICH_DOCUMENT,
                Some("visa"),
                &[
                    "Un relevé bancaire",
                    "Un état des dépenses de carte VISA",
                    "Une demande de carte",
                    "Un contrat d'assurance",
                ],
                1,
                "C'est un état de dépense d'une carte VISA",
            ),
        ],
        partie3_final: vec![
            question(
                "f1",
                "Le budget de Monsieur et Madame Thirion est-il équilibré ?",
                None,
                &[
                    "Non, ils sont en déficit",
                    "Oui, leur budget est équilibré (positif)",
                    "Non, ils dépensent exactement ce qu'ils gagnent",
                    "Impossible à déterminer",
                ],
                1,
                "Oui, leur budget de septembre est positif car leurs entrées (2102,52€) sont supérieures à leurs sorties (1750€)",
            ),
            question(
                "f2",
                "Monsieur et Madame Thirion peuvent-ils économiser ce mois-ci ?",
                None,
                &[
                    "Non, ils ne peuvent pas économiser",
                    "Oui, ils peuvent économiser 352,52€",
                    "Oui, mais seulement 100€",
                    "Non, ils sont en déficit",
                ],
                1,
                "Oui, ils peuvent économiser 352,52€ (différence entre entrées et sorties)",
            ),
            question(
                "f3",
                "Quelle proportion représente l'épargne par rapport aux ressources ?",
                None,
                &[
                    "Environ 1/3 des ressources",
                    "Environ 1/5 des ressources (17%)",
                    "La moitié des ressources",
                    "Environ 1/10 des ressources",
                ],
                1,
                "L'épargne représente environ 1/5 des ressources, soit 17% (352,52€ / 2102,52€)",
            ),
            question(
                "f4",
                "Comment nomme-t-on précisément le revenu de Julie ?",
                None,
                &[
                    "Un salaire",
                    "Une pension",
                    "Des allocations de chômage",
                    "Une allocation familiale",
                ],
                2,
                "Le revenu de Julie s'appelle des allocations de chômage",
            ),
            question(
                "f5",
                "Pourquoi ce ménage n'a-t-il pas d'allocations familiales dans ses entrées ?",
                None,
                &[
                    "Ils ont oublié de les demander",
                    "Ils gagnent trop d'argent",
                    "Ils n'ont pas encore d'enfant",
                    "Ils ne sont pas mariés",
                ],
                2,
                "Ils n'ont pas d'allocations familiales car ils n'ont pas encore d'enfant",
            ),
        ],
    }
}

impl ContentBundle {
    /// The built-in exercise content
    pub fn builtin() -> Self {
        Self {
            documents: builtin_documents(),
            budget: builtin_budget(),
            quiz: builtin_quiz(),
        }
    }
}
