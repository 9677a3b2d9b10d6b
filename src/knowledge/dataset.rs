use crate::models::knowledge::KnowledgeEntry;

/// The compiled-in learning content for the quiz engine.
///
/// Topics and wording follow common German nursing curricula. Content is
/// written as short declarative sentences separated by ". " so the sentence
/// splitter in the templates can work with it directly.
pub fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "Thrombose",
            "Risikofaktoren",
            "Eine Thrombose entsteht nach der Virchow-Trias durch Gefäßwandschäden, verlangsamte Blutströmung und veränderte Blutzusammensetzung. \
             Immobilität nach Operationen zählt zu den wichtigsten Risikofaktoren für eine tiefe Venenthrombose. \
             Auch Übergewicht, Rauchen und hormonelle Verhütungsmittel erhöhen das Thromboserisiko deutlich.",
            &["Virchow-Trias", "Immobilität", "Blutgerinnung", "Venenstau"],
            "Pflege Heute, Kap. 22.1",
        ),
        KnowledgeEntry::new(
            "Thrombose",
            "Prophylaxe",
            "Medizinische Thromboseprophylaxestrümpfe verbessern den venösen Rückstrom zum Herzen. \
             Frühmobilisation nach Operationen ist die wirksamste Maßnahme der Thromboseprophylaxe. \
             Niedermolekulares Heparin wird subkutan verabreicht und hemmt die Blutgerinnung.",
            &["Frühmobilisation", "Kompressionsstrümpfe", "Heparin", "venöser Rückstrom"],
            "Pflege Heute, Kap. 22.2",
        ),
        KnowledgeEntry::new(
            "Thrombose",
            "Symptome",
            "Typische Zeichen einer tiefen Beinvenenthrombose sind Schwellung, Spannungsgefühl und ziehende Schmerzen in der Wade. \
             Die betroffene Extremität kann überwärmt und bläulich verfärbt sein. \
             Bei Verdacht auf eine Thrombose wird das Bein ruhiggestellt und sofort ein Arzt informiert.",
            &["Schwellung", "Wadenschmerz", "Überwärmung", "Zyanose"],
            "I care Pflege, Thieme",
        ),
        KnowledgeEntry::new(
            "Diabetes mellitus",
            "Typ 1",
            "Beim Typ-1-Diabetes zerstört das Immunsystem die insulinproduzierenden Betazellen der Bauchspeicheldrüse. \
             Die Erkrankung beginnt meist im Kindes- oder Jugendalter und erfordert eine lebenslange Insulintherapie. \
             Typische Erstsymptome sind starker Durst, häufiges Wasserlassen und Gewichtsverlust.",
            &["Autoimmunerkrankung", "Betazellen", "Insulinmangel", "Polyurie"],
            "Pflege Heute, Kap. 18.1",
        ),
        KnowledgeEntry::new(
            "Diabetes mellitus",
            "Typ 2",
            "Der Typ-2-Diabetes beruht auf einer Insulinresistenz der Körperzellen und entwickelt sich über Jahre schleichend. \
             Übergewicht und Bewegungsmangel sind die wichtigsten vermeidbaren Risikofaktoren. \
             Die Behandlung beginnt mit Gewichtsreduktion, Ernährungsumstellung und regelmäßiger Bewegung.",
            &["Insulinresistenz", "Übergewicht", "Bewegungsmangel", "Lebensstiländerung"],
            "Pflege Heute, Kap. 18.2",
        ),
        KnowledgeEntry::new(
            "Diabetes mellitus",
            "Hypoglykämie",
            "Eine Hypoglykämie liegt bei einem Blutzuckerwert unter 50 Milligramm pro Deziliter vor. \
             Warnzeichen sind Zittern, Schwitzen, Heißhunger und plötzliche Konzentrationsstörungen. \
             Wache Betroffene erhalten sofort schnell wirksame Kohlenhydrate wie Traubenzucker oder Fruchtsaft.",
            &["Unterzuckerung", "Traubenzucker", "Schwitzen", "Blutzuckerkontrolle"],
            "I care Pflege, Thieme",
        ),
        KnowledgeEntry::new(
            "Wundmanagement",
            "Wundheilungsphasen",
            "Die Wundheilung verläuft in Exsudationsphase, Granulationsphase und Epithelisierungsphase. \
             In der Exsudationsphase reinigt sich die Wunde durch austretende Wundflüssigkeit selbst. \
             Während der Granulationsphase bildet der Körper neues Gewebe und die Wunde füllt sich langsam auf.",
            &["Exsudation", "Granulation", "Epithelisierung", "Wundflüssigkeit"],
            "Thiemes Pflege, Kap. 15.1",
        ),
        KnowledgeEntry::new(
            "Wundmanagement",
            "Chronische Wunden",
            "Eine Wunde gilt als chronisch, wenn sie trotz fachgerechter Versorgung innerhalb von acht Wochen nicht abheilt. \
             Häufige Ursachen sind Durchblutungsstörungen, Diabetes mellitus und dauerhafte Druckeinwirkung. \
             Die Behandlung richtet sich immer zuerst gegen die zugrunde liegende Ursache.",
            &["Ulcus cruris", "Durchblutungsstörung", "Wundstagnation", "Grunderkrankung"],
            "Expertenstandard Chronische Wunden, DNQP",
        ),
        KnowledgeEntry::new(
            "Wundmanagement",
            "Verbandwechsel",
            "Der Verbandwechsel erfolgt unter aseptischen Bedingungen mit sterilen Materialien und der Non-Touch-Technik. \
             Vor und nach jedem Verbandwechsel wird eine hygienische Händedesinfektion durchgeführt. \
             Die Wunde wird bei jedem Wechsel auf Größe, Wundgrund, Exsudat und Infektionszeichen beurteilt.",
            &["Aseptik", "Non-Touch-Technik", "Wundbeurteilung", "sterile Materialien"],
            "Thiemes Pflege, Kap. 15.2",
        ),
        KnowledgeEntry::new(
            "Dekubitus",
            "Entstehung",
            "Ein Dekubitus entsteht durch anhaltenden Druck auf Haut und Gewebe über knöchernen Vorsprüngen. \
             Der Druck verschließt feine Blutgefäße, sodass das Gewebe nicht mehr mit Sauerstoff versorgt wird. \
             Besonders gefährdet sind Kreuzbein, Fersen, Sitzbeinhöcker und der Hinterkopf.",
            &["Druckgeschwür", "Minderdurchblutung", "Prädilektionsstellen", "Gewebeschädigung"],
            "Expertenstandard Dekubitusprophylaxe, DNQP",
        ),
        KnowledgeEntry::new(
            "Dekubitus",
            "Risikoeinschätzung",
            "Das Dekubitusrisiko wird mit standardisierten Instrumenten wie der Braden-Skala eingeschätzt. \
             Die Braden-Skala bewertet unter anderem Mobilität, Aktivität, Feuchtigkeit und sensorisches Empfinden. \
             Die Einschätzung wird bei jeder Zustandsveränderung wiederholt und dokumentiert.",
            &["Braden-Skala", "Risikoassessment", "Mobilität", "Dokumentation"],
            "Expertenstandard Dekubitusprophylaxe, DNQP",
        ),
        KnowledgeEntry::new(
            "Dekubitus",
            "Prophylaxe",
            "Die wirksamste Dekubitusprophylaxe ist die regelmäßige Druckentlastung durch Positionswechsel. \
             Bewegungsförderung und druckverteilende Hilfsmittel ergänzen die Umlagerung. \
             Die Haut gefährdeter Personen wird täglich inspiziert, besonders über Knochenvorsprüngen.",
            &["Druckentlastung", "Positionswechsel", "Hautinspektion", "Weichlagerung"],
            "Pflege Heute, Kap. 25",
        ),
        KnowledgeEntry::new(
            "Fieber",
            "Definition und Messung",
            "Von Fieber spricht man ab einer Körperkerntemperatur von 38,3 Grad Celsius. \
             Die rektale Messung kommt der tatsächlichen Körperkerntemperatur am nächsten. \
             Werte zwischen 37,5 und 38,2 Grad Celsius werden als erhöhte Temperatur bezeichnet.",
            &["Körperkerntemperatur", "rektale Messung", "subfebrile Temperatur", "Thermometer"],
            "I care Pflege, Thieme",
        ),
        KnowledgeEntry::new(
            "Fieber",
            "Fieberverlauf",
            "Im Fieberanstieg frieren die Betroffenen und zeigen häufig Schüttelfrost. \
             Auf der Fieberhöhe ist die Haut heiß und trocken, der Puls deutlich beschleunigt. \
             Im Fieberabfall schwitzen die Betroffenen stark und benötigen Wäschewechsel und Flüssigkeit.",
            &["Schüttelfrost", "Fieberhöhe", "Entfieberung", "Wäschewechsel"],
            "Pflege Heute, Kap. 14.1",
        ),
        KnowledgeEntry::new(
            "Fieber",
            "Pflegemaßnahmen",
            "Fiebernde Menschen brauchen reichlich Flüssigkeit, da der Körper pro Grad Temperaturerhöhung zusätzlich Wasser verliert. \
             Wadenwickel senken die Temperatur nur, wenn die Beine warm durchblutet sind. \
             Die Vitalzeichen werden bei Fieber engmaschig kontrolliert und dokumentiert.",
            &["Flüssigkeitszufuhr", "Wadenwickel", "Vitalzeichenkontrolle", "Bettruhe"],
            "Pflege Heute, Kap. 14.2",
        ),
        KnowledgeEntry::new(
            "Hygiene",
            "Händedesinfektion",
            "Die hygienische Händedesinfektion dauert mindestens 30 Sekunden und umfasst auch Daumen, Fingerkuppen und Nagelfalze. \
             Sie erfolgt vor und nach jedem Patientenkontakt sowie nach Kontakt mit infektiösem Material. \
             Schmuck und künstliche Fingernägel sind im Dienst nicht zulässig, da sie die Desinfektion behindern.",
            &["Einreibemethode", "Patientenkontakt", "Desinfektionsmittel", "Nagelfalze"],
            "RKI-Empfehlung Händehygiene",
        ),
        KnowledgeEntry::new(
            "Hygiene",
            "Nosokomiale Infektionen",
            "Nosokomiale Infektionen werden im Zusammenhang mit einem Krankenhausaufenthalt oder einer Pflegemaßnahme erworben. \
             Häufige Formen sind Harnwegsinfektionen, Wundinfektionen und Pneumonien. \
             Konsequente Händehygiene ist die wichtigste Einzelmaßnahme zu ihrer Vermeidung.",
            &["Krankenhausinfektion", "Harnwegsinfektion", "Erregerübertragung", "Prävention"],
            "I care Pflege, Thieme",
        ),
        KnowledgeEntry::new(
            "Hygiene",
            "Schutzausrüstung",
            "Persönliche Schutzausrüstung umfasst Handschuhe, Schutzkittel, Mund-Nasen-Schutz und Schutzbrille. \
             Die Auswahl richtet sich nach der erwarteten Exposition und dem Übertragungsweg des Erregers. \
             Nach Gebrauch wird die Ausrüstung in festgelegter Reihenfolge abgelegt, um Kontamination zu vermeiden.",
            &["Handschuhe", "Schutzkittel", "Kontamination", "Übertragungsweg"],
            "TRBA 250",
        ),
        KnowledgeEntry::new(
            "Sturzprophylaxe",
            "Risikofaktoren",
            "Sturzrisikofaktoren sind unter anderem Gangunsicherheit, Sehstörungen, Schwindel und die Einnahme von Sedativa. \
             Auch Stolperfallen wie lose Teppiche, schlechte Beleuchtung und ungeeignetes Schuhwerk erhöhen die Gefahr. \
             Ein zurückliegender Sturz ist der stärkste Hinweis auf ein erhöhtes Sturzrisiko.",
            &["Gangunsicherheit", "Sedativa", "Stolperfallen", "Sturzanamnese"],
            "Expertenstandard Sturzprophylaxe, DNQP",
        ),
        KnowledgeEntry::new(
            "Sturzprophylaxe",
            "Maßnahmen",
            "Gezieltes Kraft- und Balancetraining senkt das Sturzrisiko älterer Menschen nachweislich. \
             Hüftprotektoren können die Folgen eines Sturzes abmildern, verhindern ihn aber nicht. \
             Die Wohnumgebung wird auf Stolperfallen überprüft und ausreichend beleuchtet.",
            &["Balancetraining", "Hüftprotektoren", "Umgebungsanpassung", "Beleuchtung"],
            "Expertenstandard Sturzprophylaxe, DNQP",
        ),
        KnowledgeEntry::new(
            "Sturzprophylaxe",
            "Sturzfolgen",
            "Häufige Sturzfolgen sind Prellungen, Frakturen und die Angst vor weiteren Stürzen. \
             Die hüftgelenksnahe Femurfraktur ist eine der schwerwiegendsten Verletzungen nach Stürzen älterer Menschen. \
             Nach jedem Sturz werden Hergang, Verletzungen und mögliche Ursachen dokumentiert.",
            &["Femurfraktur", "Sturzangst", "Prellung", "Sturzprotokoll"],
            "Pflege Heute, Kap. 27",
        ),
        KnowledgeEntry::new(
            "Schmerzmanagement",
            "Schmerzarten",
            "Akuter Schmerz hat eine Warnfunktion und klingt mit der Heilung der Ursache ab. \
             Chronischer Schmerz besteht länger als drei bis sechs Monate und hat seine Warnfunktion verloren. \
             Neuropathischer Schmerz entsteht durch Schädigung von Nervenstrukturen und wird oft als brennend beschrieben.",
            &["Warnfunktion", "chronischer Schmerz", "neuropathischer Schmerz", "Schmerzgedächtnis"],
            "Expertenstandard Schmerzmanagement, DNQP",
        ),
        KnowledgeEntry::new(
            "Schmerzmanagement",
            "Schmerzerfassung",
            "Die Schmerzintensität wird mit Skalen wie der numerischen Rangskala von 0 bis 10 erfasst. \
             Bei Menschen mit Demenz kommen Fremdeinschätzungsinstrumente wie die BESD-Skala zum Einsatz. \
             Schmerz wird regelmäßig erfasst, in Ruhe ebenso wie bei Belastung.",
            &["numerische Rangskala", "BESD-Skala", "Selbsteinschätzung", "Schmerzintensität"],
            "Expertenstandard Schmerzmanagement, DNQP",
        ),
        KnowledgeEntry::new(
            "Schmerzmanagement",
            "Medikamentöse Therapie",
            "Das WHO-Stufenschema ordnet Schmerzmittel in drei Stufen von Nichtopioiden bis zu starken Opioiden. \
             Schmerzmittel werden nach festem Zeitplan gegeben, nicht erst bei erneut auftretendem Schmerz. \
             Bei einer Opioidtherapie werden Atmung, Bewusstsein und Verdauung regelmäßig überwacht.",
            &["WHO-Stufenschema", "Opioide", "Bedarfsmedikation", "Atemdepression"],
            "Pflege Heute, Kap. 13",
        ),
        KnowledgeEntry::new(
            "Ernährung",
            "Mangelernährung",
            "Mangelernährung zeigt sich durch ungewollten Gewichtsverlust, Muskelabbau und nachlassende Leistungsfähigkeit. \
             Screening-Instrumente wie das Mini Nutritional Assessment erkennen gefährdete Personen früh. \
             Ursachen sind unter anderem Kau- und Schluckstörungen, Appetitlosigkeit und Demenz.",
            &["Gewichtsverlust", "Ernährungsscreening", "Muskelabbau", "Appetitlosigkeit"],
            "Expertenstandard Ernährungsmanagement, DNQP",
        ),
        KnowledgeEntry::new(
            "Ernährung",
            "Flüssigkeitshaushalt",
            "Ältere Menschen haben ein vermindertes Durstempfinden und trinken häufig zu wenig. \
             Zeichen einer Exsikkose sind stehende Hautfalten, trockene Schleimhäute und Verwirrtheit. \
             Die Trinkmenge wird bei gefährdeten Personen mit einem Einfuhrprotokoll überwacht.",
            &["Exsikkose", "Durstempfinden", "Einfuhrprotokoll", "Dehydratation"],
            "I care Pflege, Thieme",
        ),
        KnowledgeEntry::new(
            "Ernährung",
            "Sondenernährung",
            "Über eine PEG-Sonde wird Sondennahrung direkt in den Magen verabreicht. \
             Vor jeder Nahrungsgabe wird die korrekte Lage der Sonde überprüft. \
             Zur Vermeidung einer Aspiration wird der Oberkörper während der Gabe um mindestens 30 Grad hochgelagert.",
            &["PEG-Sonde", "Aspiration", "Oberkörperhochlagerung", "Sondennahrung"],
            "Pflege Heute, Kap. 17",
        ),
        KnowledgeEntry::new(
            "Pneumonieprophylaxe",
            "Risikofaktoren",
            "Ein erhöhtes Pneumonierisiko besteht bei Bettlägerigkeit, flacher Atmung und geschwächtem Hustenreflex. \
             Auch Schluckstörungen begünstigen eine Lungenentzündung durch Aspiration von Speichel oder Nahrung. \
             Nach Operationen im Bauch- und Brustraum ist die Atmung oft schmerzbedingt eingeschränkt.",
            &["Bettlägerigkeit", "Hustenreflex", "Schluckstörung", "flache Atmung"],
            "Thiemes Pflege, Kap. 16.1",
        ),
        KnowledgeEntry::new(
            "Pneumonieprophylaxe",
            "Atemübungen",
            "Atemvertiefende Übungen verbessern die Belüftung der Lunge und beugen einem Sekretstau vor. \
             Geräte zur Atemtherapie wie der Triflow regen zu einer tiefen Einatmung an. \
             Die Kontaktatmung unterstützt bewusstes, vertieftes Atmen durch aufgelegte Hände der Pflegenden.",
            &["Sekretstau", "Triflow", "Kontaktatmung", "Atemvertiefung"],
            "Thiemes Pflege, Kap. 16.2",
        ),
        KnowledgeEntry::new(
            "Pneumonieprophylaxe",
            "Lagerung",
            "Die Oberkörperhochlagerung erleichtert die Atmung und senkt das Aspirationsrisiko. \
             Dehnlagerungen belüften gezielt unterschiedliche Lungenabschnitte. \
             Regelmäßige Positionswechsel mobilisieren Sekret und verbessern die Durchlüftung der Lunge.",
            &["Oberkörperhochlagerung", "Dehnlagerung", "Sekretmobilisation", "Positionswechsel"],
            "Pflege Heute, Kap. 16",
        ),
    ]
}
