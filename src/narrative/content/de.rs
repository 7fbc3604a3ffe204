use super::{Catalog, ClosingKind};
use crate::models::WeatherCategory;
use crate::narrative::assembler::SeasonalPhase;
use crate::narrative::scenario::ScenarioKey;

pub static CATALOG: Catalog = Catalog {
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    peak: "Maximum",
    minimum: "Minimum",
    scenarios: &[
        (
            ScenarioKey::RainClearingSoon,
            &[
                "Das Grau hält nicht lange: {clear_day} bringt klareren Himmel, in {days_until} Tagen ist das Licht zurück.",
                "Durchhalten. Für {clear_day} ist Sonne angesagt, die nasse Phase endet in {days_until} Tagen.",
                "Heute ist der Tunnel, {clear_day} der Ausgang. In {days_until} Tagen wird es wieder hell.",
                "Jetzt Wolken, aber {clear_day} sieht klar aus. Halte dir das Tageslicht am {clear_day} frei.",
            ],
        ),
        (
            ScenarioKey::CarpeDiem,
            &[
                "Nutze den Tag: Die Sonne scheint, und ab {rain_day} wird es nass.",
                "Heute gutes Licht, am {rain_day} Regen. Raus ins Freie, solange das Fenster offen ist.",
                "Am {rain_day}, in {days_until} Tagen, kippt das Wetter. Heute ist der Tag für draussen.",
                "Der klare Himmel hält nur bis {rain_day}. Nutze dieses Tageslicht.",
            ],
        ),
        (
            ScenarioKey::WarmingTrend,
            &[
                "Die Woche wird um etwa {temp_change}°C wärmer, und die längeren Tage machen das Beste daraus.",
                "Die Temperaturen steigen in den nächsten Tagen um {temp_change}°C, während das Licht weiter zunimmt.",
                "Eine wärmere Woche steht bevor, {temp_change}°C bis zum Ende. Mehr Sonne, mehr Tageslicht.",
                "Mildere Tage kommen: {temp_change}°C über die Woche, und das Tageslicht wächst mit.",
            ],
        ),
        (
            ScenarioKey::CoolingTrend,
            &[
                "Die Temperaturen sinken diese Woche um etwa {temp_change}°C, der Lauf des Tageslichts bleibt gleich.",
                "Eine kühlere Phase kommt, minus {temp_change}°C. Das Licht kümmert sich nicht ums Thermometer.",
                "In den nächsten Tagen wird es {temp_change}°C kälter. Zieh dich warm an und fang die Mittagssonne ein.",
                "Abkühlung um {temp_change}°C, und doch bringt jeder Tag seinen Anteil an Licht.",
            ],
        ),
        (
            ScenarioKey::LightFighter,
            &[
                "Regen hin oder her, das Licht nimmt zu: +{delta_min} Minuten seit gestern, {day_length} insgesamt.",
                "Das Wetter verdeckt es, aber heute gibt es {delta_min} Minuten mehr Tageslicht als gestern.",
                "Hinter den Wolken wachsen die Tage weiter. {day_length} Licht heute, {delta_min} Minuten mehr als gestern.",
                "Grauer Himmel stoppt den Trend nicht: {delta_min} Minuten mehr Licht heute, {day_length} insgesamt.",
            ],
        ),
        (
            ScenarioKey::GoodStreak,
            &[
                "{streak_days} gute Tage in Folge stehen an. Viel Tageslicht zum Planen.",
                "Ab heute folgen {streak_days} helle Tage. Die Sonne ist zurück.",
                "Beständiges Wetter für {streak_days} Tage. Verteile deine Pläne draussen auf das Licht.",
                "Sonnige Phase voraus: {streak_days} Tage mit nutzbarem Tageslicht am Stück.",
            ],
        ),
        (
            ScenarioKey::GreyStretch,
            &[
                "{streak_days} graue Tage in Folge, aber das Tageslicht hält seinen eigenen Fahrplan.",
                "Eine nasse Phase von {streak_days} Tagen. Das Licht kommt trotzdem jeden Morgen zurück.",
                "Der Himmel bleibt {streak_days} Tage schwer. Fang jedes bisschen Tageslicht ein.",
                "Noch {streak_days} Tage grau, während sich die Tage darunter weiter verändern.",
            ],
        ),
        (
            ScenarioKey::BreakthroughDay,
            &[
                "Die Sonne ist zurück. Heute bricht sie durch, also raus ins Freie und Licht tanken.",
                "Endlich ein klarer Tag. Nutze den Tag und gönn deinen Augen echtes Tageslicht.",
                "Heller Himmel heute. Auf so einen Tag hat das Licht hingearbeitet.",
                "Heute gewinnt die Sonne. Geh hinaus und nimm das Tageslicht mit.",
            ],
        ),
        (
            ScenarioKey::PeakLight,
            &[
                "Wir sind auf dem Höhepunkt des Jahres: {day_length} Tageslicht heute.",
                "Hochsaison des Lichts mit {day_length} Tag. Die langen Abende gehören dir.",
                "{day_length} Sonne über dem Horizont. Wenige Tage im Jahr sind so grosszügig.",
                "Maximales Tageslicht: {day_length}. Lass den Abend lang werden.",
            ],
        ),
        (
            ScenarioKey::PostSolsticeGrind,
            &[
                "Der Winter hält noch fest, aber seit der Sonnenwende hast du schon {hours_gained} Tageslicht gewonnen.",
                "Seit dem dunkelsten Tag ist das Licht um {hours_gained} gewachsen. Der Wendepunkt liegt hinter uns.",
                "{hours_gained} mehr Tageslicht als zur Sonnenwende. Der Anstieg ist langsam, aber echt.",
                "Die Tage sind seit Dezember um {hours_gained} länger geworden. Der Winter verliert den Griff ums Licht.",
            ],
        ),
        (
            ScenarioKey::WeekendGood,
            &[
                "Das Wochenende sieht hell aus. Plane etwas draussen für die Stunden mit Tageslicht.",
                "Gute Nachrichten für Samstag und Sonntag: Sonne ist angesagt.",
                "Ein klares Wochenende kommt. Halte dir das Tageslicht frei.",
                "Aussicht fürs Wochenende: hell. Plane entsprechend und hol das Beste aus dem Licht.",
            ],
        ),
        (
            ScenarioKey::WeekendBad,
            &[
                "Das Wochenende wird nass. Fang das Licht lieber unter der Woche ein.",
                "Für Samstag und Sonntag ist Regen angesagt. Nimm dir vorher eine helle Stunde Tageslicht.",
                "Ein graues Wochenende steht bevor. Plane entsprechend und nutze das Licht an den Werktagen.",
                "Das Wetter am Wochenende sieht schlecht aus, das heutige Tageslicht ist also mehr wert als sonst.",
            ],
        ),
        (
            ScenarioKey::SpringAcceleration,
            &[
                "Das Licht nimmt jetzt schnell zu: +{delta_min} Minuten pro Tag.",
                "Der Frühling beschleunigt. Jeder Tag bringt {delta_min} Minuten mehr Licht.",
                "{delta_min} Minuten Tageslicht kommen jeden Tag dazu. Das ist der steilste Teil des Anstiegs.",
                "Die Tage wachsen um {delta_min} Minuten am Stück. Man spürt den Schwung.",
            ],
        ),
        (
            ScenarioKey::SolsticeApproaching,
            &[
                "Die Sonnenwende ist {days_to_solstice} Tage entfernt, und mit ihr das {peak_or_min} des Tageslichts.",
                "Noch {days_to_solstice} Tage, bis das Licht sein {peak_or_min} erreicht. Ein Wendepunkt naht.",
                "Wir nähern uns dem {peak_or_min} des Tageslichts, nur noch {days_to_solstice} Tage.",
                "In {days_to_solstice} Tagen erreicht die Sonne ihren Wendepunkt, das {peak_or_min} des Jahres.",
            ],
        ),
        (
            ScenarioKey::StableFocusLight,
            &[
                "Heute gibt es {day_length} Tageslicht. Geh hinaus und nimm dir etwas davon.",
                "{day_length} Licht heute. Schon ein kurzer Spaziergang darin macht einen Unterschied.",
                "Der Tag bietet {day_length} Tageslicht. Such dir ein Fenster davon aus.",
                "Mit {day_length} Tag zur Verfügung sind ein paar Minuten Sonne immer drin.",
            ],
        ),
    ],
    unlit_focus: &[
        "Egal was die Zahlen sagen, der Tag will genutzt werden. Geh hinaus und tank etwas Licht.",
        "Schon ein kurzer Spaziergang im heutigen Licht macht einen Unterschied.",
        "Such dir heute ein Fenster Tageslicht, so kurz es auch ist.",
        "Ein paar Minuten Sonne sind immer drin. Geh sie suchen.",
    ],
    daylight_facts: &[
        "Heute hast du {day_length} Tageslicht, von {sunrise} bis {sunset}.",
        "Der Tag dauert {day_length}, Sonnenaufgang um {sunrise}, Sonnenuntergang um {sunset}.",
        "Tageslicht heute: {day_length}. Die Sonne steht von {sunrise} bis {sunset} am Himmel.",
        "Du hast heute {day_length} Licht, {sunrise} bis {sunset}.",
    ],
    delta_gain: &[
        "Das sind {delta} Minuten mehr als gestern.",
        "Du hast {delta} Minuten gegenüber gestern gewonnen.",
        "+{delta} Minuten im Vergleich zu gestern.",
        "Der Tag ist {delta} Minuten länger als gestern.",
    ],
    delta_loss: &[
        "Das sind {delta} Minuten weniger als gestern.",
        "Du hast {delta} Minuten gegenüber gestern verloren.",
        "-{delta} Minuten im Vergleich zu gestern.",
        "Der Tag ist {delta} Minuten kürzer als gestern.",
    ],
    seasonal: &[
        (
            SeasonalPhase::DeepWinter,
            &[
                "Wir sind mitten im Winter, doch seit der Sonnenwende werden die Tage länger.",
                "Die dunkelsten Tage liegen hinter uns. Jeder Tag bringt jetzt etwas mehr Licht.",
                "Draussen tiefer Winter, aber das Licht kehrt leise zurück.",
            ],
        ),
        (
            SeasonalPhase::LateWinter,
            &[
                "Der Spätwinter hat Schwung; der Gewinn an Tageslicht beschleunigt sich.",
                "Dies ist die schnellste Phase der Lichtzunahme vor der Tagundnachtgleiche.",
                "Der Weg zum Frühling ist jetzt unübersehbar.",
            ],
        ),
        (
            SeasonalPhase::EarlySpring,
            &[
                "Der Frühling ist da, die Tage sind nun länger als die Nächte.",
                "Wir sind in der hellen Hälfte des Jahres angekommen.",
                "Die Tagundnachtgleiche liegt hinter uns, das Gleichgewicht kippt zum Licht.",
            ],
        ),
        (
            SeasonalPhase::LateSpring,
            &[
                "Wir nähern uns dem Maximum, die längsten Tage des Jahres sind nah.",
                "Der Spätfrühling bietet einige der besten Lichtverhältnisse des Jahres.",
                "Die Abende werden lang auf dem Weg zur Sommersonnenwende.",
            ],
        ),
        (
            SeasonalPhase::PeakSummer,
            &[
                "Wir sind am oder nahe am Höhepunkt des Tageslichts.",
                "Die Sonnenwende ist Höhepunkt und Wendepunkt zugleich.",
                "Wir stehen auf dem Gipfel der Lichtkurve des Jahres.",
            ],
        ),
        (
            SeasonalPhase::LateSummer,
            &[
                "Der Sommer ist noch kräftig, doch die Tage sind kürzer als zur Sonnenwende.",
                "Das Licht im Spätsommer ist grosszügig, auch wenn die Sonne jede Woche früher untergeht.",
                "Der langsame Rückzug vom maximalen Tageslicht hat begonnen.",
            ],
        ),
        (
            SeasonalPhase::EarlyAutumn,
            &[
                "Der Herbst ist da; die Abnahme des Tageslichts spiegelt den Frühling.",
                "Wir sind in der dunklen Hälfte des Jahres, die Tage sind kürzer als die Nächte.",
                "Jede Herbstwoche bringt merklich frühere Sonnenuntergänge.",
            ],
        ),
        (
            SeasonalPhase::LateAutumn,
            &[
                "Die kürzesten Tage des Jahres nahen, die Sonnenwende bringt die Wende.",
                "Der Spätherbst bringt wenig Licht, aber die Umkehr ist nur Wochen entfernt.",
                "Die dunkelsten Tage kommen, und mit ihnen die Rückkehr des Lichts.",
            ],
        ),
    ],
    nature_by_month: [
        &[
            "Wintervögel sind vor kahlen Ästen gut zu sehen.",
            "Die tiefe Sonne wirft lange Schatten und goldenes Licht.",
            "Eisblumen an Fenstern zeigen die Geometrie der Natur.",
        ],
        &[
            "Schneeglöckchen und frühe Krokusse schieben sich durch den Boden.",
            "An milden Morgen ist mehr Vogelgesang zu hören.",
            "Das Nachmittagslicht bleibt jede Woche etwas länger.",
        ],
        &[
            "Narzissen kündigen den Frühling an.",
            "Zugvögel kehren zurück, jeden Morgen sind neue Lieder zu hören.",
            "Die Landschaft wird Woche für Woche grüner.",
        ],
        &[
            "Kirsch- und Apfelblüten zeigen sich in voller Pracht.",
            "Die Bäume treiben aus, das Blätterdach schliesst sich.",
            "Die Schwalben kehren aus dem Süden zurück.",
        ],
        &[
            "Holunder und Weissdorn duften an den Hecken.",
            "Junge Vögel werden flügge und üben im Garten.",
            "Die Blumenwiesen erreichen ihre volle Farbe.",
        ],
        &[
            "Holunderblüten sind reif für Sirup.",
            "Heckenrosen blühen rosa und weiss.",
            "Lange Abende laden zu späten Spaziergängen ein.",
        ],
        &[
            "Lavendel lockt ganze Wolken von Schmetterlingen an.",
            "Grillen und Heuschrecken liefern den Klang des Sommers.",
            "Mauersegler jagen kreischend durch den Abendhimmel.",
        ],
        &[
            "Brombeeren reifen in Hülle und Fülle.",
            "Schwalben sammeln sich auf den Leitungen für den Zug.",
            "Morgennebel kündigen den Herbst an.",
        ],
        &[
            "Vogelbeeren und Kirschen färben sich zuerst.",
            "Nach dem Regen sprießen Pilze in Wald und Wiese.",
            "Spinnennetze fangen den Morgentau.",
        ],
        &[
            "Ahorn, Eiche und Buche zeigen ihre Herbstfarben.",
            "Der Laubfall beschleunigt sich durch den Monat.",
            "Wildgänse ziehen aus dem Norden heran.",
        ],
        &[
            "Die Bäume sind fast kahl, die Landschaft öffnet sich.",
            "Stare tanzen in Schwärmen am Abendhimmel.",
            "Der Frost wird regelmässig.",
        ],
        &[
            "Immergrüne Pflanzen stehen für Leben in den dunkelsten Tagen.",
            "Rotkehlchen sind jetzt am leichtesten zu entdecken.",
            "Die Stille des Winters hat ihren eigenen Reiz.",
        ],
    ],
    nature_by_weather: &[
        (
            WeatherCategory::Clear,
            &[
                "Klarer Himmel holt heute das Beste aus dem Tageslicht heraus.",
                "Blauer Himmel verstärkt das Licht wunderbar.",
                "Sonnenschein hebt Lichtpegel und Laune.",
            ],
        ),
        (
            WeatherCategory::Grey,
            &[
                "Bedeckt heute, aber die Stunden mit Tageslicht bleiben gleich.",
                "Graue Wolken machen das Licht weicher, nicht den Tag kürzer.",
                "Das Licht wird von Wolken gestreut, ist aber nützlich.",
            ],
        ),
        (
            WeatherCategory::Rain,
            &[
                "Regen heute; das Licht ist da, nur durch Wolken gefiltert.",
                "Der Regen fällt, aber Sonnenaufgang und -untergang halten ihren Takt.",
                "Nasses Wetter, doch der Trend des Tageslichts geht weiter.",
            ],
        ),
        (
            WeatherCategory::Snow,
            &[
                "Schnee heute; die weisse Fläche verstärkt jedes bisschen Licht.",
                "Schnee erhellt die Landschaft trotz kurzer Tage.",
                "Ein Schneetag hat seine eigene Helligkeit.",
            ],
        ),
    ],
    general_facts: &[
        "Morgenlicht stellt die innere Uhr für den ganzen Tag.",
        "Selbst ein bedeckter Himmel liefert ein Vielfaches des Lichts eines hellen Zimmers.",
        "Die Tageslänge ändert sich um die Tagundnachtgleichen am schnellsten.",
        "Vögel richten Gesang und Brut nach der Tageslänge, nicht nach der Temperatur.",
        "Die Dämmerung schenkt nutzbares Licht vor Sonnenaufgang und nach Sonnenuntergang.",
        "Je weiter vom Äquator entfernt, desto grösser die jahreszeitlichen Unterschiede.",
    ],
    closings: &[
        (
            ClosingKind::Practical,
            &[
                "Ein kurzer Spaziergang am Mittag erwischt das hellste Licht.",
                "Leg die Besorgungen draussen in die hellen Stunden.",
            ],
        ),
        (
            ClosingKind::Observational,
            &[
                "Achte darauf, wo die Sonne heute untergeht.",
                "Schau heute mindestens einmal in den Himmel.",
            ],
        ),
        (
            ClosingKind::Simple,
            &["Geniess das Licht.", "Einen schönen Tag.", "Bis morgen."],
        ),
    ],
    minute_phrases: &["+{delta} Minuten", "{delta} Minuten mehr", "{delta} Minuten"],
    delta_phrases: &["+{delta} Minuten", "{delta} Minuten mehr", "{delta} Minuten weniger"],
    action_phrases: &[
        "Raus ins Freie",
        "Nutze den Tag",
        "Plane entsprechend",
        "die Sonne ist zurück",
        "das Licht nimmt zu",
        "Wendepunkt",
    ],
};
