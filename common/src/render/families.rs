//! Built-in checklists of the three known equipment families.
//!
//! Inspections created before templates existed store their results in
//! `Inspection::points`, keyed `section.field`, and are laid out by the fixed
//! catalogs below. They go through the same visibility rule as template
//! sections.

use crate::model::inspection::{EquipmentType, Inspection};
use crate::model::point::field_key;
use crate::model::template::{SectionLayout, TemplateSection, TemplateSubsection};
use crate::render::sections::{render_section, RenderedSection};

type Sub = TemplateSubsection;

fn section(
    id: &str,
    title: &str,
    layout: SectionLayout,
    subsections: Vec<TemplateSubsection>,
) -> TemplateSection {
    TemplateSection {
        id: id.to_string(),
        title: title.to_string(),
        layout,
        subsections,
    }
}

fn antecedent() -> TemplateSection {
    section(
        "antecedent",
        "Antécédents du produit",
        SectionLayout::TitleContent,
        vec![Sub::note("historique", "Chute, choc, stockage ou utilisation inhabituels")],
    )
}

fn observations() -> TemplateSection {
    section(
        "observations",
        "Observations préliminaires",
        SectionLayout::TitleContent,
        vec![
            Sub::item("marquage", "Marquage lisible (référence, lot, norme)"),
            Sub::item("peremption", "Durée de vie dépassée"),
            Sub::item("notice", "Notice d'utilisation présente"),
        ],
    )
}

fn helmet() -> Vec<TemplateSection> {
    vec![
        antecedent(),
        observations(),
        section(
            "calotte",
            "Calotte",
            SectionLayout::Stacked,
            vec![
                Sub::item("impacts", "Impacts, fissures, déformations").crossable(),
                Sub::item("brulures", "Brûlures, traces de produits chimiques").crossable(),
                Sub::item("usure", "Rayures profondes, usure"),
            ],
        ),
        section(
            "calotin",
            "Calotin",
            SectionLayout::Stacked,
            vec![Sub::item("etat", "Fissure, déformation, écrasement").crossable()],
        ),
        section(
            "coiffe",
            "Coiffe et tour de tête",
            SectionLayout::Stacked,
            vec![
                Sub::item("sangles", "Sangles de coiffe: coupure, usure").crossable(),
                Sub::item("reglage", "Système de réglage"),
                Sub::item("mousse", "Mousse de confort"),
            ],
        ),
        section(
            "jugulaire",
            "Jugulaire",
            SectionLayout::Stacked,
            vec![
                Sub::item("sangle", "Coupure, effilochage, usure").crossable(),
                Sub::item("boucle", "Boucle de fermeture"),
                Sub::item("coutures", "Coutures"),
            ],
        ),
        section(
            "accessoires",
            "Accessoires",
            SectionLayout::Stacked,
            vec![
                Sub::item("clips", "Clips de lampe frontale"),
                Sub::note("autre", "Autres accessoires"),
            ],
        ),
    ]
}

fn harness() -> Vec<TemplateSection> {
    vec![
        antecedent(),
        observations(),
        section(
            "sangles",
            "Sangles",
            SectionLayout::Stacked,
            vec![
                Sub::subtitle("titre_ceinture", "Ceinture"),
                Sub::item("ceinture", "Coupure, brûlure, effilochage, usure").crossable(),
                Sub::subtitle("titre_cuissards", "Cuissards"),
                Sub::item("cuissards", "Coupure, brûlure, effilochage, usure").crossable(),
                Sub::subtitle("titre_bretelles", "Bretelles"),
                Sub::item("bretelles", "Coupure, brûlure, effilochage, usure").crossable(),
            ],
        ),
        section(
            "coutures",
            "Coutures",
            SectionLayout::Stacked,
            vec![Sub::item("etat", "Fils coupés, usés ou distendus").crossable()],
        ),
        section(
            "boucles",
            "Boucles et réglages",
            SectionLayout::Stacked,
            vec![
                Sub::item("deformation", "Déformation, fissure").crossable(),
                Sub::item("corrosion", "Corrosion"),
                Sub::item("fonctionnement", "Fonctionnement du réglage"),
            ],
        ),
        section(
            "points_attache",
            "Points d'attache",
            SectionLayout::Stacked,
            vec![
                Sub::item("ventral", "Ventral").list_item(),
                Sub::item("sternal", "Sternal").list_item(),
                Sub::item("dorsal", "Dorsal").list_item(),
                Sub::item("lateraux", "Latéraux").list_item(),
                Sub::item("porte_materiel", "Porte-matériel").list_item(),
            ],
        ),
    ]
}

fn carabiner() -> Vec<TemplateSection> {
    vec![
        antecedent(),
        observations(),
        section(
            "corps",
            "Corps",
            SectionLayout::Stacked,
            vec![
                Sub::item("deformation", "Déformation, fissure, usure").crossable(),
                Sub::item("corrosion", "Corrosion, oxydation").crossable(),
                Sub::item("aretes", "Arêtes vives, marques"),
            ],
        ),
        section(
            "doigt",
            "Doigt",
            SectionLayout::Stacked,
            vec![
                Sub::item("ouverture", "Ouverture et fermeture complètes"),
                Sub::item("ressort", "Ressort de rappel"),
                Sub::item("bec", "Bec et crochet").crossable(),
            ],
        ),
        section(
            "verrouillage",
            "Verrouillage",
            SectionLayout::Stacked,
            vec![
                Sub::item("bague", "Bague à vis, automatique").crossable(),
                Sub::item("fonctionnement", "Fonctionnement du verrouillage"),
            ],
        ),
    ]
}

/// Fixed checklist of an equipment family, empty for `Other`.
pub fn static_catalog(equipment_type: EquipmentType) -> Vec<TemplateSection> {
    match equipment_type {
        EquipmentType::Helmet => helmet(),
        EquipmentType::Harness => harness(),
        EquipmentType::Carabiner => carabiner(),
        EquipmentType::Other => Vec::new(),
    }
}

/// Renders `inspection.points` with the catalog of its family, in catalog
/// order.
pub fn render_static_sections(inspection: &Inspection) -> Vec<RenderedSection> {
    static_catalog(inspection.equipment_type)
        .iter()
        .enumerate()
        .filter_map(|(position, section)| {
            render_section(
                section,
                position,
                Some(&inspection.points),
                |sub_id| field_key(&section.id, sub_id),
                &inspection.crossed_out_words,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::inspection::NewInspection;
    use crate::model::point::{CrossedOutWords, InspectionPoint, PointStatus};
    use crate::render::sections::RowKind;
    use chrono::Utc;
    use std::collections::{BTreeMap, HashSet};

    fn inspection(
        equipment_type: EquipmentType,
        points: &[(&str, InspectionPoint)],
    ) -> Inspection {
        NewInspection {
            reference: "REF".to_string(),
            serial_number: String::new(),
            equipment_type,
            product_name: None,
            manufacturer: None,
            manufacture_date: None,
            first_use_date: None,
            inspection_date: None,
            next_inspection_date: None,
            photo_url: None,
            inspector: None,
            state: Default::default(),
            points: points
                .iter()
                .map(|(k, p)| (k.to_string(), p.clone()))
                .collect::<BTreeMap<_, _>>(),
            template_id: None,
            template_sections: None,
            crossed_out_words: CrossedOutWords::new(),
        }
        .into_inspection(1, Utc::now())
    }

    #[test]
    fn catalogs_have_unique_ids() {
        for ty in [EquipmentType::Helmet, EquipmentType::Harness, EquipmentType::Carabiner] {
            let catalog = static_catalog(ty);
            assert!(!catalog.is_empty());
            let mut seen = HashSet::new();
            for section in &catalog {
                assert!(seen.insert(section.id.clone()), "{} twice in {:?}", section.id, ty);
                let mut subs = HashSet::new();
                for sub in &section.subsections {
                    assert!(subs.insert(sub.id.clone()));
                }
            }
        }
        assert!(static_catalog(EquipmentType::Other).is_empty());
    }

    #[test]
    fn all_valid_helmet_renders_nothing() {
        let insp = inspection(
            EquipmentType::Helmet,
            &[
                ("calotte.impacts", InspectionPoint::new(PointStatus::V)),
                ("jugulaire.boucle", InspectionPoint::new(PointStatus::V)),
            ],
        );
        assert!(render_static_sections(&insp).is_empty());
    }

    #[test]
    fn carabiner_sections_keep_catalog_order() {
        let insp = inspection(
            EquipmentType::Carabiner,
            &[
                ("verrouillage.bague", InspectionPoint::new(PointStatus::X)),
                ("antecedent.historique", InspectionPoint::with_comment(PointStatus::V, "Chute de 3 m")),
                ("corps.corrosion", InspectionPoint::new(PointStatus::NA)),
            ],
        );
        let ids: Vec<String> = render_static_sections(&insp).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["antecedent", "corps", "verrouillage"]);
    }

    #[test]
    fn harness_subtitles_are_always_listed() {
        let insp = inspection(
            EquipmentType::Harness,
            &[("sangles.cuissards", InspectionPoint::new(PointStatus::X))],
        );
        let rendered = render_static_sections(&insp);
        assert_eq!(rendered.len(), 1);
        let rows: Vec<&str> = rendered[0].rows.iter().map(|r| r.subsection_id.as_str()).collect();
        assert_eq!(rows, vec!["titre_ceinture", "titre_cuissards", "cuissards", "titre_bretelles"]);
        assert_eq!(rendered[0].rows[2].field_key, "sangles.cuissards");

        let empty = render_static_sections(&inspection(EquipmentType::Harness, &[]));
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].id, "sangles");
        assert!(empty[0].rows.iter().all(|r| r.kind == RowKind::Subtitle));
    }

    #[test]
    fn other_family_has_no_static_rendering() {
        let insp = inspection(
            EquipmentType::Other,
            &[("corps.deformation", InspectionPoint::new(PointStatus::X))],
        );
        assert!(render_static_sections(&insp).is_empty());
    }
}
