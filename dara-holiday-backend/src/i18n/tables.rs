pub const IT: &[(&str, &str)] = &[
    ("navbar.home", "Home"),
    ("navbar.rooms", "Camere"),
    ("navbar.gallery", "Galleria"),
    ("navbar.contacts", "Contatti"),
    ("navbar.book", "Prenota"),
    ("navbar.language", "Lingua"),
    ("hero.title", "DaraHoliday Apartments"),
    ("hero.subtitle", "Il tuo rifugio esclusivo nel cuore di Marsala."),
    ("hero.viewRooms", "Visualizza Camere"),
    ("hero.bookNow", "Prenota Ora"),
    ("welcome.title", "Benvenuti a Marsala"),
    (
        "welcome.description",
        "Scopri la bellezza della Sicilia occidentale soggiornando nei nostri appartamenti \
         curati nei minimi dettagli. Situati in posizioni strategiche, offriamo il punto di \
         partenza ideale per esplorare le saline, le isole Egadi e il centro storico.",
    ),
    ("welcome.discover", "Scopri di più"),
    ("welcome.previous", "Immagine precedente"),
    ("welcome.next", "Immagine successiva"),
    ("common.guests", "Ospiti"),
    ("common.night", "notte"),
    ("common.available", "Disponibile"),
    ("common.from", "da"),
    ("common.price_variable", "Prezzo Variabile"),
    ("common.discover_price", "Scoprilo Ora"),
    ("common.details", "Dettagli"),
    ("common.back_home", "Torna alla Home"),
    ("reviews.title", "Dicono di noi"),
    ("reviews.subtitle", "Le recensioni dei nostri ospiti"),
    ("reviews.rating", "Valutazione {{rating}} stelle."),
    ("rooms.title", "Le Nostre Camere"),
    (
        "rooms.subtitle",
        "Trova la soluzione perfetta per le tue esigenze.",
    ),
    ("rooms.count_one", "{{count}} camera disponibile."),
    ("rooms.count_other", "{{count}} camere disponibili."),
    ("rooms.filter_all", "Tutte"),
    ("rooms.filter_guests", "{{count}} Ospiti"),
    ("rooms.empty", "Nessuna camera trovata con questo filtro."),
    ("rooms.capacity", "{{count}} ospiti"),
    ("detail.not_found", "Camera non trovata"),
    (
        "detail.not_found_text",
        "La camera che cerchi non esiste o non è più disponibile.",
    ),
    ("detail.description", "Descrizione"),
    ("detail.amenities", "Servizi Inclusi"),
    ("detail.features", "Caratteristiche"),
    (
        "detail.size",
        "Questo alloggio offre {{size}} m² di spazio per il tuo comfort.",
    ),
    ("detail.superhost", "Superhost"),
    (
        "detail.superhost_text",
        "Gli host sono esperti e hanno recensioni eccellenti.",
    ),
    ("detail.book_title", "Prenota il tuo soggiorno"),
    (
        "detail.book_text",
        "Il prezzo dipende dalle date. Verifica la disponibilità sul nostro portale.",
    ),
    ("detail.checkin", "Check-in / Check-out"),
    ("detail.checkin_value", "15:00 / 10:00"),
    ("detail.cancellation", "Cancellazione"),
    ("detail.cancellation_value", "Gratuita entro 48h"),
    ("detail.cleaning", "Pulizia"),
    ("detail.cleaning_value", "Inclusa"),
    ("detail.share", "Condividi"),
    ("detail.share_subject", "DaraHoliday Apartments: {{name}}"),
    ("detail.open_gallery", "Mostra tutte le foto"),
    ("detail.photo", "Foto {{current}} di {{total}}"),
    ("detail.previous", "Foto precedente"),
    ("detail.next", "Foto successiva"),
    ("detail.close", "Chiudi"),
    ("gallery.title", "Galleria"),
    ("gallery.subtitle", "Marsala e i nostri appartamenti, in foto e video."),
    ("gallery.marsala", "Marsala"),
    ("gallery.renders", "Render"),
    ("gallery.empty", "Nessun contenuto in questa categoria."),
    ("gallery.previous", "Precedente"),
    ("gallery.next", "Successivo"),
    ("gallery.close", "Chiudi"),
    ("contacts.title", "Contattaci"),
    (
        "contacts.subtitle",
        "Siamo disponibili per rispondere alle tue domande durante gli orari seguenti:",
    ),
    ("contacts.hours_title", "Orari di Disponibilità"),
    ("contacts.weekdays", "Lun - Ven:"),
    ("contacts.weekdays_hours", "09:00 - 18:00"),
    ("contacts.weekend", "Sab - Dom:"),
    ("contacts.weekend_hours", "10:00 - 16:00"),
    ("contacts.call", "Chiamaci direttamente"),
    ("contacts.write", "Scrivi un'email"),
    ("contacts.instagram", "Seguici per foto e aggiornamenti"),
    ("contacts.facebook", "Seguici su Facebook"),
    ("contacts.form_title", "Inviaci una Richiesta"),
    (
        "contacts.form_subtitle",
        "Compila il modulo e ti risponderemo al più presto.",
    ),
    ("contacts.name", "Nome"),
    ("contacts.name_placeholder", "Il tuo nome"),
    ("contacts.email", "Email"),
    ("contacts.phone", "Telefono"),
    ("contacts.message", "Messaggio"),
    ("contacts.message_placeholder", "Scrivi il tuo messaggio..."),
    ("contacts.send", "Invia"),
    ("contacts.sent_title", "Messaggio Inviato!"),
    ("contacts.sent_text", "Grazie, ti risponderemo presto."),
    ("contacts.required", "Campo obbligatorio."),
    ("contacts.invalid_email", "Inserisci un indirizzo email valido."),
    ("language.title", "Lingua"),
    ("language.core", "Traduzione curata"),
    ("language.overlay", "Traduzione automatica"),
    (
        "language.overlay_note",
        "Traduzione automatica attiva: {{language}}.",
    ),
    ("errors.not_found", "Pagina non trovata"),
    ("footer.rights", "© 2024 DaraHoliday. Tutti i diritti riservati."),
];

pub const EN: &[(&str, &str)] = &[
    ("navbar.home", "Home"),
    ("navbar.rooms", "Rooms"),
    ("navbar.gallery", "Gallery"),
    ("navbar.contacts", "Contacts"),
    ("navbar.book", "Book"),
    ("navbar.language", "Language"),
    ("hero.title", "DaraHoliday Apartments"),
    ("hero.subtitle", "Your exclusive retreat in the heart of Marsala."),
    ("hero.viewRooms", "View Rooms"),
    ("hero.bookNow", "Book Now"),
    ("welcome.title", "Welcome to Marsala"),
    (
        "welcome.description",
        "Discover the beauty of Western Sicily by staying in our meticulously curated \
         apartments. Strategically located, they offer the ideal starting point to explore \
         the salt pans, the Egadi Islands, and the historic center.",
    ),
    ("welcome.discover", "Discover More"),
    ("welcome.previous", "Previous image"),
    ("welcome.next", "Next image"),
    ("common.guests", "Guests"),
    ("common.night", "night"),
    ("common.available", "Available"),
    ("common.from", "from"),
    ("common.price_variable", "Price Variable"),
    ("common.details", "Details"),
    ("common.back_home", "Back to Home"),
    ("reviews.title", "What our guests say"),
    ("reviews.subtitle", "Reviews from our guests"),
    ("reviews.rating", "Rated {{rating}} stars."),
    ("rooms.title", "Our Rooms"),
    ("rooms.subtitle", "Find the perfect fit for your stay."),
    ("rooms.count_one", "{{count}} apartment available."),
    ("rooms.count_other", "{{count}} apartments available."),
    ("rooms.filter_all", "All"),
    ("rooms.filter_guests", "{{count}} Guests"),
    ("rooms.empty", "No rooms match this filter."),
    ("rooms.capacity", "{{count}} guests"),
    ("detail.not_found", "Room not found"),
    (
        "detail.not_found_text",
        "The room you are looking for does not exist or is no longer available.",
    ),
    ("detail.description", "Description"),
    ("detail.amenities", "Included Amenities"),
    ("detail.features", "Features"),
    (
        "detail.size",
        "This apartment offers {{size}} m² of space for your comfort.",
    ),
    ("detail.superhost", "Superhost"),
    (
        "detail.superhost_text",
        "The hosts are experienced and highly rated.",
    ),
    ("detail.book_title", "Book your stay"),
    (
        "detail.book_text",
        "The price depends on your dates. Check availability on our booking portal.",
    ),
    ("detail.checkin", "Check-in / Check-out"),
    ("detail.checkin_value", "15:00 / 10:00"),
    ("detail.cancellation", "Cancellation"),
    ("detail.cancellation_value", "Free up to 48h before"),
    ("detail.cleaning", "Cleaning"),
    ("detail.cleaning_value", "Included"),
    ("detail.share", "Share"),
    ("detail.share_subject", "DaraHoliday Apartments: {{name}}"),
    ("detail.open_gallery", "Show all photos"),
    ("detail.photo", "Photo {{current}} of {{total}}"),
    ("detail.previous", "Previous photo"),
    ("detail.next", "Next photo"),
    ("detail.close", "Close"),
    ("gallery.title", "Gallery"),
    ("gallery.subtitle", "Marsala and our apartments in photos and videos."),
    ("gallery.marsala", "Marsala"),
    ("gallery.renders", "Renders"),
    ("gallery.empty", "Nothing in this category yet."),
    ("gallery.previous", "Previous"),
    ("gallery.next", "Next"),
    ("gallery.close", "Close"),
    ("contacts.title", "Contact us"),
    (
        "contacts.subtitle",
        "We are happy to answer your questions during the following hours:",
    ),
    ("contacts.hours_title", "Opening Hours"),
    ("contacts.weekdays", "Mon - Fri:"),
    ("contacts.weekdays_hours", "09:00 - 18:00"),
    ("contacts.weekend", "Sat - Sun:"),
    ("contacts.weekend_hours", "10:00 - 16:00"),
    ("contacts.call", "Call us directly"),
    ("contacts.write", "Write an email"),
    ("contacts.instagram", "Follow us for photos and news"),
    ("contacts.facebook", "Follow us on Facebook"),
    ("contacts.form_title", "Send us a Request"),
    (
        "contacts.form_subtitle",
        "Fill in the form and we will get back to you as soon as possible.",
    ),
    ("contacts.name", "Name"),
    ("contacts.name_placeholder", "Your name"),
    ("contacts.email", "Email"),
    ("contacts.phone", "Phone"),
    ("contacts.message", "Message"),
    ("contacts.message_placeholder", "Write your message..."),
    ("contacts.send", "Send"),
    ("contacts.sent_title", "Message Sent!"),
    ("contacts.sent_text", "Thank you, we will get back to you soon."),
    ("contacts.required", "This field is required."),
    ("contacts.invalid_email", "Please enter a valid email address."),
    ("language.title", "Language"),
    ("language.core", "Curated translation"),
    ("language.overlay", "Machine translation"),
    (
        "language.overlay_note",
        "Machine translation active: {{language}}.",
    ),
    ("errors.not_found", "Page not found"),
    ("footer.rights", "© 2024 DaraHoliday. All rights reserved."),
];

pub const FR: &[(&str, &str)] = &[
    ("navbar.home", "Accueil"),
    ("navbar.rooms", "Chambres"),
    ("navbar.gallery", "Galerie"),
    ("navbar.contacts", "Contacts"),
    ("navbar.book", "Réserver"),
    ("navbar.language", "Langue"),
    ("hero.title", "DaraHoliday Apartments"),
    ("hero.subtitle", "Votre refuge exclusif au cœur de Marsala."),
    ("hero.viewRooms", "Voir les Chambres"),
    ("hero.bookNow", "Réserver Maintenant"),
    ("welcome.title", "Bienvenue à Marsala"),
    (
        "welcome.description",
        "Découvrez la beauté de la Sicile occidentale en séjournant dans nos appartements \
         méticuleusement soignés. Idéalement situés, ils offrent le point de départ idéal \
         pour explorer les marais salants, les îles Égades et le centre historique.",
    ),
    ("welcome.discover", "En savoir plus"),
    ("common.guests", "Invités"),
    ("common.night", "nuit"),
    ("common.available", "Disponible"),
    ("common.from", "à partir de"),
    ("common.price_variable", "Prix Variable"),
];

pub const DE: &[(&str, &str)] = &[
    ("navbar.home", "Startseite"),
    ("navbar.rooms", "Zimmer"),
    ("navbar.gallery", "Galerie"),
    ("navbar.contacts", "Kontakte"),
    ("navbar.book", "Buchen"),
    ("navbar.language", "Sprache"),
    ("hero.title", "DaraHoliday Apartments"),
    ("hero.subtitle", "Ihr exklusiver Rückzugsort im Herzen von Marsala."),
    ("hero.viewRooms", "Zimmer Ansehen"),
    ("hero.bookNow", "Jetzt Buchen"),
    ("welcome.title", "Willkommen in Marsala"),
    (
        "welcome.description",
        "Entdecken Sie die Schönheit Westsiziliens in unseren sorgfältig eingerichteten \
         Apartments. Strategisch günstig gelegen, bieten sie den idealen Ausgangspunkt, um \
         die Salinen, die Ägadischen Inseln und das historische Zentrum zu erkunden.",
    ),
    ("welcome.discover", "Mehr entdecken"),
    ("common.guests", "Gäste"),
    ("common.night", "Nacht"),
    ("common.available", "Verfügbar"),
    ("common.from", "ab"),
    ("common.price_variable", "Preis Variabel"),
];

pub const ES: &[(&str, &str)] = &[
    ("navbar.home", "Inicio"),
    ("navbar.rooms", "Habitaciones"),
    ("navbar.gallery", "Galería"),
    ("navbar.contacts", "Contactos"),
    ("navbar.book", "Reservar"),
    ("navbar.language", "Idioma"),
    ("hero.title", "DaraHoliday Apartments"),
    ("hero.subtitle", "Tu refugio exclusivo en el corazón de Marsala."),
    ("hero.viewRooms", "Ver Habitaciones"),
    ("hero.bookNow", "Reservar Ahora"),
    ("welcome.title", "Bienvenido a Marsala"),
    (
        "welcome.description",
        "Descubre la belleza de Sicilia occidental alojándote en nuestros apartamentos \
         meticulosamente cuidados. Ubicados estratégicamente, ofrecen el punto de partida \
         ideal para explorar las salinas, las islas Egadi y el centro histórico.",
    ),
    ("welcome.discover", "Descubre más"),
    ("common.guests", "Huéspedes"),
    ("common.night", "noche"),
    ("common.available", "Disponible"),
    ("common.from", "desde"),
    ("common.price_variable", "Precio Variable"),
];
