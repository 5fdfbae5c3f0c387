//! Страница «Boletines»: технические бюллетени, зашитые в сборку.

use crate::shared::icons::icon;
use contracts::domain::a003_product::attribute_value::format_date;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bulletin {
    pub title: &'static str,
    /// ISO-дата публикации
    pub date: &'static str,
    pub summary: &'static str,
    pub url: &'static str,
}

pub const BULLETINS: &[Bulletin] = &[
    Bulletin {
        title: "Nuevas aplicaciones de discos ventilados",
        date: "2024-03-18",
        summary: "Se agregan aplicaciones para modelos compactos 2019-2023 en la línea de discos ventilados.",
        url: "/boletines/2024-03-discos-ventilados.pdf",
    },
    Bulletin {
        title: "Cambio de referencia en kits de embrague",
        date: "2024-06-02",
        summary: "Los kits con referencia anterior se sustituyen por la nueva numeración. Consulte la tabla de equivalencias.",
        url: "/boletines/2024-06-kits-embrague.pdf",
    },
    Bulletin {
        title: "Torque de apriete recomendado para mazas",
        date: "2023-11-27",
        summary: "Valores de torque y secuencia de apriete para mazas de rueda delanteras y traseras.",
        url: "/boletines/2023-11-torque-mazas.pdf",
    },
    Bulletin {
        title: "Identificación de variantes de pastillas",
        date: "2024-09-10",
        summary: "Cómo distinguir las variantes con sensor de desgaste de las variantes sin sensor.",
        url: "/boletines/2024-09-pastillas-sensor.pdf",
    },
];

/// Сначала свежие; ISO-даты сравниваются как строки
pub fn newest_first(bulletins: &[Bulletin]) -> Vec<Bulletin> {
    let mut sorted = bulletins.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(a.date));
    sorted
}

#[component]
pub fn BulletinsPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("file-text")}
                    <h1 class="page__title">"Boletines"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{BULLETINS.len().to_string()}</span>
                    </Badge>
                </div>
            </div>

            <div class="bulletin-list">
                {newest_first(BULLETINS)
                    .into_iter()
                    .map(|b| view! {
                        <article class="bulletin">
                            <div class="bulletin__meta">
                                <span class="bulletin__date">{format_date(b.date)}</span>
                            </div>
                            <h3 class="bulletin__title">{b.title}</h3>
                            <p class="bulletin__summary">{b.summary}</p>
                            <a class="bulletin__link" href=b.url target="_blank" rel="noopener">
                                {icon("external-link")}
                                " Ver boletín"
                            </a>
                        </article>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let dates: Vec<&str> = newest_first(BULLETINS).iter().map(|b| b.date).collect();
        assert_eq!(dates, vec!["2024-09-10", "2024-06-02", "2024-03-18", "2023-11-27"]);
    }

    #[test]
    fn test_dates_are_displayable() {
        for b in BULLETINS {
            assert_ne!(format_date(b.date), b.date, "unparsed date {}", b.date);
        }
    }
}
